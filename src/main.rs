use anyhow::Context;
use shopping_cart_cli::command::CommandLoop;
use shopping_cart_cli::config::{Args, Config};
use shopping_cart_cli::logging;
use tokio::io::BufReader;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse_args();
    logging::init_logging(args.verbose);

    let config = Config::from(&args);
    tracing::debug!(?config, "configuration loaded");

    // Single cart for the whole run
    let mut command_loop = CommandLoop::new(config);

    let stdin = BufReader::new(tokio::io::stdin());
    let mut stdout = tokio::io::stdout();

    let report = command_loop
        .run(stdin, &mut stdout)
        .await
        .context("shopping cart run aborted")?;

    tracing::debug!(?report, "input exhausted");
    Ok(())
}

#[cfg(test)]
mod tests {
    use shopping_cart_cli::command::CommandLoop;
    use shopping_cart_cli::config::Config;

    #[tokio::test]
    async fn test_cart_and_payment_flow() {
        let mut command_loop = CommandLoop::new(Config::default());
        let input = "addItem apple 5\naddItem 3 banana 2\nprocessPayment 11\n";
        let mut output = Vec::new();

        let report = command_loop
            .run(input.as_bytes(), &mut output)
            .await
            .expect("run failed");

        assert_eq!(report.commands_applied, 3);
        assert_eq!(command_loop.cart().calculate_total(), 11);

        let text = String::from_utf8(output).unwrap();
        assert!(text.ends_with("Processing cash on delivery payment of $11.00\n"));
    }
}
