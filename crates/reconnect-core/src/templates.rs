//! Check-in message templates.

const TEMPLATES: [&str; 3] = [
    "Hi {name}, it's been a while! I hope you've been well. Just wanted to check in and see how things are going.",
    "Hey {name}, I was thinking of you and realized it's been some time since we last connected. How have you been?",
    "Hi {name}, hope everything's going well. It's been a bit since we spoke, would love to catch up when you have a moment.",
];

pub const DEFAULT_NAME: &str = "there";

/// Every template with `{name}` filled in. Blank names fall back to "there".
pub fn render_templates(name: &str) -> Vec<String> {
    let name = match name.trim() {
        "" => DEFAULT_NAME,
        trimmed => trimmed,
    };
    TEMPLATES.iter().map(|t| t.replace("{name}", name)).collect()
}
