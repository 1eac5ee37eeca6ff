pub const DEFAULT_WHO: &str = "world";

pub fn greet(who: &str) -> String {
    format!("Hello {}", who)
}
