//! Prints the embedded sample program as highlighted HTML.

fn main() {
    hilite_cli::logging::init();
    println!("{}", hilite_cli::demo::render_sample());
}
