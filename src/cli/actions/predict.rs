use fintrack_core::predictor;

#[derive(Debug)]
pub struct Args {
    pub input: String,
}

/// Print the placeholder prediction; blank input prints nothing.
pub fn execute(args: &Args) {
    if let Some(prediction) = predictor::predict(&args.input) {
        println!("{prediction}");
    }
}
