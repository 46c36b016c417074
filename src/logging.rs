use chrono::Local;
use std::fmt::{Debug, Write as _};
use tracing::field::{Field, Visit};
use tracing::{Event, Subscriber};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::{FmtContext, FormatEvent, FormatFields};
use tracing_subscriber::registry::LookupSpan;

/// One line per event: `<emoji> <LEVEL> [HH:MM:SS] <test>: <message> <fields>`
///
/// The `test` field recorded by [`crate::TestContext`] is lifted in front
/// of the message so interleaved output from several tests stays readable.
/// Events without it drop the name.
pub struct CustomFormatter;

#[derive(Default)]
struct EventFields {
    test: Option<String>,
    message: String,
    rest: String,
}

impl Visit for EventFields {
    fn record_debug(&mut self, field: &Field, value: &dyn Debug) {
        match field.name() {
            "test" => self.test = Some(format!("{:?}", value)),
            "message" => self.message = format!("{:?}", value),
            name => {
                let _ = write!(self.rest, " {}={:?}", name, value);
            }
        }
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        match field.name() {
            "test" => self.test = Some(value.to_string()),
            "message" => self.message = value.to_string(),
            name => {
                let _ = write!(self.rest, " {}={:?}", name, value);
            }
        }
    }
}

impl<S, N> FormatEvent<S, N> for CustomFormatter
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        _ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> std::fmt::Result {
        let (emoji, level_str) = match *event.metadata().level() {
            tracing::Level::TRACE => ("🔬", "TRACE"),
            tracing::Level::DEBUG => ("🐛", "DEBUG"),
            tracing::Level::INFO => ("ℹ️ ", "INFO"),
            tracing::Level::WARN => ("⚠️ ", "WARN"),
            tracing::Level::ERROR => ("❌", "ERROR"),
        };
        let timestamp = Local::now().format("%H:%M:%S");

        let mut fields = EventFields::default();
        event.record(&mut fields);

        write!(writer, "{} {} [{}]", emoji, level_str, timestamp)?;
        if let Some(test) = &fields.test {
            write!(writer, " {}", test)?;
        }
        writeln!(writer, ": {}{}", fields.message, fields.rest)
    }
}

/// Default filter directive for assertion events
pub fn default_filter(verbose: bool) -> &'static str {
    if verbose { "expect=debug,warn" } else { "expect=warn,error" }
}

/// Install a test-friendly subscriber.
///
/// Output goes through the libtest capture writer, so it only shows up for
/// failing tests. `RUST_LOG` overrides the default filter. Calling this more
/// than once is harmless; later calls are ignored.
pub fn init(verbose: bool) {
    let _ = tracing_subscriber::fmt()
        .event_format(CustomFormatter)
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(default_filter(verbose))),
        )
        .with_test_writer()
        .try_init();
}
