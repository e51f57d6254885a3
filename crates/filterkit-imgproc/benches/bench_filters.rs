use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

use filterkit_image::Image;
use filterkit_imgproc::{
    filter::{self, kernels::Average5Method},
    parallel::ExecutionStrategy,
};

fn bench_filters(c: &mut Criterion) {
    let mut group = c.benchmark_group("Filters");

    for (width, height) in [(256, 224), (512, 448), (1024, 896)].iter() {
        group.throughput(criterion::Throughput::Elements((*width * *height) as u64));

        let parameter_string = format!("{}x{}", width, height);

        let image_data = (0..width * height)
            .map(|i| (i % 251) as f64)
            .collect::<Vec<_>>();
        let image = Image::new([*width, *height].into(), image_data).unwrap();
        let output = Image::from_size_val(image.size(), 0.0).unwrap();

        group.bench_with_input(
            BenchmarkId::new("edge_vertical", &parameter_string),
            &(&image, &output),
            |b, i| {
                let (src, mut dst) = (i.0, i.1.clone());
                b.iter(|| black_box(filter::edge_vertical(src, &mut dst)))
            },
        );

        group.bench_with_input(
            BenchmarkId::new("edge_vertical_separable", &parameter_string),
            &(&image, &output),
            |b, i| {
                let (src, mut dst) = (i.0, i.1.clone());
                b.iter(|| black_box(filter::edge_vertical_separable(src, &mut dst)))
            },
        );

        group.bench_with_input(
            BenchmarkId::new("moving_average5", &parameter_string),
            &(&image, &output),
            |b, i| {
                let (src, mut dst) = (i.0, i.1.clone());
                b.iter(|| black_box(filter::moving_average5(src, &mut dst)))
            },
        );

        for method in [Average5Method::ClosedForm, Average5Method::Accumulated] {
            group.bench_with_input(
                BenchmarkId::new(
                    format!("moving_average5_separable_{:?}", method),
                    &parameter_string,
                ),
                &(&image, &output),
                |b, i| {
                    let (src, mut dst) = (i.0, i.1.clone());
                    b.iter(|| black_box(filter::moving_average5_separable(src, &mut dst, method)))
                },
            );
        }

        for strategy in [ExecutionStrategy::Serial, ExecutionStrategy::Parallel] {
            group.bench_with_input(
                BenchmarkId::new(format!("sobel_{:?}", strategy), &parameter_string),
                &(&image, &output),
                |b, i| {
                    let (src, mut dst) = (i.0, i.1.clone());
                    b.iter(|| black_box(filter::sobel_with_strategy(src, &mut dst, strategy)))
                },
            );
        }
    }
    group.finish();
}

criterion_group!(benches, bench_filters);
criterion_main!(benches);
