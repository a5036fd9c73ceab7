fn main() {
    if let Err(e) = addhost::cli::run() {
        println!("Error: {e}");
    }
}
