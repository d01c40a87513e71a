//! Human-readable query logging.
//!
//! Separate from the `tracing` events every statement emits: a [`QueryLog`]
//! receives the exact SQL and arguments and is free to render them inline.
//! Logging is off unless a sink is installed with
//! [`Db::with_query_log`](crate::Db::with_query_log).

use crate::value::Value;
use std::io::{self, Write};
use std::sync::Mutex;

/// Receives every statement the engine executes.
///
/// Fire-and-forget: implementations must not fail the query.
pub trait QueryLog {
    fn record(&self, sql: &str, args: &[Value]);
}

impl<F> QueryLog for F
where
    F: Fn(&str, &[Value]),
{
    fn record(&self, sql: &str, args: &[Value]) {
        self(sql, args)
    }
}

/// Replaces each `$n` in `sql` with the inline rendering of `args[n - 1]`.
///
/// Placeholders without a matching argument are left as they are, and text
/// coming from an argument is never scanned again.
///
/// ```
/// use rowbind_core::{Value, log::render_inline};
///
/// let sql = render_inline(
///     "SELECT * FROM animals WHERE slug = $1 AND age > $2",
///     &[Value::from("rigby"), Value::Integer(2)],
/// );
/// assert_eq!(sql, "SELECT * FROM animals WHERE slug = 'rigby' AND age > 2");
/// ```
pub fn render_inline(sql: &str, args: &[Value]) -> String {
    let mut out = String::with_capacity(sql.len());
    let mut rest = sql;

    while let Some(dollar) = rest.find('$') {
        out.push_str(&rest[..dollar]);
        let after = &rest[dollar + 1..];
        let digits = after.bytes().take_while(u8::is_ascii_digit).count();

        let arg = after[..digits]
            .parse::<usize>()
            .ok()
            .and_then(|index| index.checked_sub(1))
            .and_then(|index| args.get(index));

        match arg {
            Some(value) => out.push_str(&value.to_log_string()),
            None => {
                out.push('$');
                out.push_str(&after[..digits]);
            }
        }
        rest = &after[digits..];
    }

    out.push_str(rest);
    out
}

/// Writes each rendered statement to `W`.
#[derive(Debug)]
pub struct WriterLog<W> {
    writer: Mutex<W>,
}

impl<W: Write> WriterLog<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer: Mutex::new(writer),
        }
    }

    pub fn into_inner(self) -> W {
        match self.writer.into_inner() {
            Ok(writer) => writer,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

impl<W: Write> QueryLog for WriterLog<W> {
    fn record(&self, sql: &str, args: &[Value]) {
        let line = render_inline(sql, args);
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{line}");
        }
    }
}

/// Logs rendered statements to standard output.
pub type StdoutLog = WriterLog<io::Stdout>;

impl StdoutLog {
    pub fn stdout() -> Self {
        WriterLog::new(io::stdout())
    }
}
