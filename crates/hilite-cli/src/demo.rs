//! Embedded demo: a fixed sample program through the standard pipeline.

pub const SAMPLE_SOURCE: &str = r#"// This is a comment
int main() {
    // Another comment
    std::cout << "Hello, World!" << std::endl;
    return 0;
}"#;

pub fn render_sample() -> String {
    hilite_stages::render(SAMPLE_SOURCE)
}
