use std::fmt;
use tracing::{Event, Subscriber};
use tracing_subscriber::fmt::{format::Writer, FmtContext, FormatEvent, FormatFields};
use tracing_subscriber::registry::LookupSpan;

/// Event formatter that wraps each field in brackets.
/// Format: [TIMESTAMP] [LEVEL] [SPAN] [TARGET:LINE]: MESSAGE
pub struct BracketedFormatter;

impl<S, N> FormatEvent<S, N> for BracketedFormatter
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> fmt::Result {
        let metadata = event.metadata();

        let now = chrono::Local::now();
        write!(writer, "[{}] ", now.format("%Y-%m-%dT%H:%M:%S%.3f"))?;
        write!(writer, "[{:5}] ", metadata.level())?;

        // Innermost span, or the last segment of the module path
        let scope_name = ctx
            .event_scope()
            .and_then(|scope| scope.from_root().last().map(|span| span.name()))
            .unwrap_or_else(|| short_target(metadata.target()));
        write!(writer, "[{}] ", scope_name)?;

        write!(
            writer,
            "[{}]: ",
            location(metadata.target(), metadata.line())
        )?;

        ctx.field_format().format_fields(writer.by_ref(), event)?;

        writeln!(writer)
    }
}

/// Last `::` segment of a module path
pub(crate) fn short_target(target: &str) -> &str {
    target.rsplit("::").next().unwrap_or(target)
}

pub(crate) fn location(target: &str, line: Option<u32>) -> String {
    match line {
        Some(line) => format!("{}:{}", target, line),
        None => target.to_string(),
    }
}
