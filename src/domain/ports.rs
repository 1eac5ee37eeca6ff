use chrono::{DateTime, Local};

pub trait FortuneSource: Send + Sync {
    fn get(&self) -> &str;
}

pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Local>;
}
