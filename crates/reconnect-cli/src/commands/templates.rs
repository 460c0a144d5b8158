use reconnect_core::render_templates;

pub fn run(name: &str) -> Result<(), Box<dyn std::error::Error>> {
    for (i, text) in render_templates(name).iter().enumerate() {
        println!("{}. {text}", i + 1);
    }
    Ok(())
}
