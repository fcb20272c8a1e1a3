use time::macros::format_description;
use tracing_subscriber::{fmt::time::LocalTime, EnvFilter};

pub fn initialize_logging() {
    let local_timer = LocalTime::new(format_description!(
        "[year]-[month]-[day] [hour]:[minute]:[second].[subsecond digits:3]+[offset_hour]:[offset_minute]"
    ));
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_timer(local_timer)
        .init();
}
