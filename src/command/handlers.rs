//! Command Loop
//!
//! Reads lines until input is exhausted, dispatches each recognized command
//! to the cart or the payment processor and writes its confirmation line
//! straight away.

use super::{models::*, parser::parse_line};
use crate::cart::{helpers::*, ShoppingCart};
use crate::config::{Config, ParseErrorPolicy, SummaryFormat};
use crate::error::CommandError;
use crate::payment::PaymentProcessor;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::{debug, error, warn};

/// Owns the cart for one run and applies commands to it
#[derive(Debug)]
pub struct CommandLoop {
    cart: ShoppingCart,
    processor: PaymentProcessor,
    config: Config,
}

impl CommandLoop {
    pub fn new(config: Config) -> Self {
        Self {
            cart: ShoppingCart::new(),
            processor: PaymentProcessor::new(),
            config,
        }
    }

    pub fn cart(&self) -> &ShoppingCart {
        &self.cart
    }

    /// Consumes `reader` line by line until end of input.
    ///
    /// Output already written stays written when a fatal error stops the run.
    pub async fn run<R, W>(&mut self, reader: R, writer: &mut W) -> Result<RunReport, CommandError>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        let mut lines = reader.lines();
        let mut report = RunReport::default();

        while let Some(line) = lines.next_line().await? {
            report.lines_read += 1;
            let line_number = report.lines_read;

            match self.handle_line(&line) {
                Ok(Outcome::Printed(text)) => {
                    write_line(writer, &text).await?;
                    report.commands_applied += 1;
                }
                Ok(Outcome::Ignored(reason)) => {
                    debug!(line = line_number, ?reason, "line ignored");
                    report.lines_ignored += 1;
                }
                Ok(Outcome::Skipped(err)) => {
                    warn!(line = line_number, "skipping line: {}", err);
                    report.lines_skipped += 1;
                }
                Err(err) => {
                    error!(line = line_number, "aborting run: {}", err);
                    return Err(err);
                }
            }
        }

        if let Some(format) = self.config.summary {
            let summary = self.render_summary(format)?;
            write_line(writer, &summary).await?;
        }

        Ok(report)
    }

    /// Parses and applies a single line.
    ///
    /// Only a malformed number under [`ParseErrorPolicy::Fatal`] is an error.
    pub fn handle_line(&mut self, line: &str) -> Result<Outcome, CommandError> {
        match parse_line(line) {
            Ok(Parsed::Command(command)) => {
                debug!(?command, "dispatching command");
                Ok(Outcome::Printed(self.apply(command)))
            }
            Ok(Parsed::Ignored(reason)) => Ok(Outcome::Ignored(reason)),
            Err(err) if err.is_malformed_number() => match self.config.parse_error_policy {
                ParseErrorPolicy::Fatal => Err(err),
                ParseErrorPolicy::Skip => Ok(Outcome::Skipped(err)),
            },
            Err(err) => Err(err),
        }
    }

    /// Applies a recognized command and returns its confirmation line
    pub fn apply(&mut self, command: Command) -> String {
        match command {
            Command::AddItem(AddItem::Single { name, unit_price }) => {
                format_added_confirmation(self.cart.add_item(name, unit_price))
            }
            Command::AddItem(AddItem::WithQuantity {
                quantity,
                name,
                unit_price,
            }) => format_added_confirmation(
                self.cart.add_item_with_quantity(quantity, name, unit_price),
            ),
            Command::ProcessPayment(payment) => self.processor.process(&payment),
        }
    }

    /// Renders the end-of-run summary line
    pub fn render_summary(&self, format: SummaryFormat) -> Result<String, CommandError> {
        match format {
            SummaryFormat::Text => Ok(format_cart_summary(&self.cart)),
            SummaryFormat::Json => Ok(serde_json::to_string(&self.cart.snapshot())?),
        }
    }
}

/// Writes one line and flushes, so output keeps pace with input
async fn write_line<W>(writer: &mut W, text: &str) -> Result<(), CommandError>
where
    W: AsyncWrite + Unpin,
{
    writer.write_all(text.as_bytes()).await?;
    writer.write_all(b"\n").await?;
    writer.flush().await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn skip_config() -> Config {
        Config {
            parse_error_policy: ParseErrorPolicy::Skip,
            ..Config::default()
        }
    }

    #[test]
    fn test_handle_line_updates_cart() {
        let mut command_loop = CommandLoop::new(Config::default());

        let outcome = command_loop.handle_line("addItem 3 banana 2").unwrap();
        assert!(matches!(
            outcome,
            Outcome::Printed(ref text)
                if text == "Added 3 unit(s) of banana to the shopping cart. Cost per unit: $2."
        ));
        assert_eq!(command_loop.cart().calculate_total(), 6);
    }

    #[test]
    fn test_payment_does_not_touch_cart() {
        let mut command_loop = CommandLoop::new(Config::default());
        command_loop.handle_line("processPayment 10").unwrap();
        assert!(command_loop.cart().is_empty());
    }

    #[test]
    fn test_fatal_policy_returns_error() {
        let mut command_loop = CommandLoop::new(Config::default());
        let err = command_loop.handle_line("addItem apple x").unwrap_err();
        assert!(err.is_malformed_number());
        assert!(command_loop.cart().is_empty());
    }

    #[test]
    fn test_skip_policy_keeps_going() {
        let mut command_loop = CommandLoop::new(skip_config());
        let outcome = command_loop.handle_line("addItem apple x").unwrap();
        assert!(matches!(outcome, Outcome::Skipped(_)));
        assert!(command_loop.cart().is_empty());
    }

    #[test]
    fn test_ignored_line_is_not_an_error() {
        let mut command_loop = CommandLoop::new(Config::default());
        let outcome = command_loop.handle_line("foo bar").unwrap();
        assert!(matches!(
            outcome,
            Outcome::Ignored(IgnoreReason::UnknownCommand(_))
        ));
    }

    #[test]
    fn test_render_summary_formats() {
        let mut command_loop = CommandLoop::new(Config::default());
        command_loop.handle_line("addItem apple 5").unwrap();

        assert_eq!(
            command_loop.render_summary(SummaryFormat::Text).unwrap(),
            "Cart total: $5 (1 item(s): 1x apple)"
        );
        assert_eq!(
            command_loop.render_summary(SummaryFormat::Json).unwrap(),
            r#"{"items":[{"name":"apple","quantity":1,"unitPrice":5}],"total":5}"#
        );
    }
}
