use std::path::Path;

use env_logger::Env;

/// Environment variable holding the log filter (`off` through `trace`).
const LOG_ENV_VAR: &str = "BMP2HTML_LOG";

fn main() {
  env_logger::Builder::from_env(Env::new().filter_or(LOG_ENV_VAR, "warn")).init();

  let args: Vec<String> = std::env::args().collect();
  if args.len() != 3 {
    println!("Converts a BMP image to an HTML table of colored cells.");
    println!();
    println!("bmp2html [input_bmp_filename] [output_html_filename]");
    return;
  }

  if let Err(e) = bmp2html::convert_file(Path::new(&args[1]), Path::new(&args[2])) {
    log::debug!("{e:?}");
    println!("{e}");
    std::process::exit(-1);
  }
}
