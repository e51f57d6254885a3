use argh::FromArgs;
use rand::{rngs::StdRng, Rng, SeedableRng};
use std::time::Instant;

use filterkit::{
    image::{Image, ImageError, ImageSize},
    imgproc::{
        filter::{self, kernels::Average5Method},
        parallel::ExecutionStrategy,
    },
};

#[derive(FromArgs)]
/// Run a filter in its direct and separable forms on a synthetic image
struct Args {
    /// the filter to apply: vertical, horizontal, average5 or sobel
    #[argh(option, default = "String::from(\"vertical\")")]
    filter: String,

    /// the input pattern: zeros, ramp, impulse or random
    #[argh(option, default = "String::from(\"ramp\")")]
    pattern: String,

    /// the image width
    #[argh(option, default = "5")]
    width: usize,

    /// the image height
    #[argh(option, default = "5")]
    height: usize,

    /// the execution strategy: serial, parallel or auto
    #[argh(option, default = "ExecutionStrategy::Auto")]
    strategy: ExecutionStrategy,

    /// how the separable 5x5 average sums its windows: closed or accumulated
    #[argh(option, default = "Average5Method::ClosedForm")]
    average5: Average5Method,
}

fn make_pattern(pattern: &str, size: ImageSize) -> Result<Image<f64>, Box<dyn std::error::Error>> {
    let num_pixels = size.width * size.height;
    let data = match pattern {
        "zeros" => vec![0.0; num_pixels],
        "ramp" => (0..num_pixels).map(|i| (i % size.width) as f64).collect(),
        "impulse" => {
            let mut img = Image::from_size_val(size, 0.0)?;
            img.set_pixel(size.width / 2, size.height / 2, 1.0)?;
            return Ok(img);
        }
        "random" => {
            let mut rng = StdRng::seed_from_u64(0);
            (0..num_pixels).map(|_| rng.random_range(0.0..1.0)).collect()
        }
        other => return Err(format!("unknown pattern '{other}'").into()),
    };
    Ok(Image::new(size, data)?)
}

fn print_image(name: &str, img: &Image<f64>) {
    println!("{name}:");
    for row in img.as_slice().chunks_exact(img.cols()) {
        let line = row
            .iter()
            .map(|v| format!("{v:8.4}"))
            .collect::<Vec<_>>()
            .join(" ");
        println!("  {line}");
    }
}

fn max_abs_diff(a: &Image<f64>, b: &Image<f64>) -> f64 {
    a.as_slice()
        .iter()
        .zip(b.as_slice())
        .map(|(x, y)| (x - y).abs())
        .fold(0.0, f64::max)
}

fn run_timed(
    name: &str,
    src: &Image<f64>,
    dst: &mut Image<f64>,
    f: impl Fn(&Image<f64>, &mut Image<f64>) -> Result<(), ImageError>,
) -> Result<(), ImageError> {
    let start = Instant::now();
    f(src, dst)?;
    log::info!("{name} took {:?}", start.elapsed());
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args: Args = argh::from_env();

    let size = ImageSize {
        width: args.width,
        height: args.height,
    };
    let src = make_pattern(&args.pattern, size)?;
    let mut direct = Image::from_size_val(size, 0.0)?;
    let mut separable = Image::from_size_val(size, 0.0)?;
    let strategy = args.strategy;

    match args.filter.to_lowercase().as_str() {
        "vertical" => {
            run_timed("direct", &src, &mut direct, |s, d| {
                filter::edge_vertical_with_strategy(s, d, strategy)
            })?;
            run_timed("separable", &src, &mut separable, |s, d| {
                filter::edge_vertical_separable_with_strategy(s, d, strategy)
            })?;
        }
        "horizontal" => {
            run_timed("direct", &src, &mut direct, |s, d| {
                filter::edge_horizontal_with_strategy(s, d, strategy)
            })?;
            run_timed("separable", &src, &mut separable, |s, d| {
                filter::edge_horizontal_separable_with_strategy(s, d, strategy)
            })?;
        }
        "average5" => {
            run_timed("direct", &src, &mut direct, |s, d| {
                filter::moving_average5_with_strategy(s, d, strategy)
            })?;
            run_timed("separable", &src, &mut separable, |s, d| {
                filter::moving_average5_separable_with_strategy(s, d, args.average5, strategy)
            })?;
        }
        "sobel" => {
            // no separable form, the magnitude is only computed directly
            run_timed("direct", &src, &mut direct, |s, d| {
                filter::sobel_with_strategy(s, d, strategy)
            })?;
            separable = direct.duplicate();
        }
        other => return Err(format!("unknown filter '{other}'").into()),
    }

    if size.width <= 12 && size.height <= 12 {
        print_image("input", &src);
        print_image(&args.filter, &direct);
    }
    println!(
        "max |direct - separable| = {:e}",
        max_abs_diff(&direct, &separable)
    );

    Ok(())
}
