use clap::{Args, Parser, Subcommand};
use customer_service::customers::{Customer, CustomerUpdate};
use serde_json::Value;

#[derive(Parser)]
#[command(name = "customer-cli")]
#[command(about = "Command-line client for the customer service", long_about = None)]
struct Cli {
    #[arg(short, long, default_value = "http://localhost:3000")]
    url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List every customer
    List,
    /// Show a single customer
    Get { id: i64 },
    /// Add a customer
    Create {
        #[arg(long)]
        id: i64,
        #[command(flatten)]
        fields: Fields,
        #[arg(long, default_value_t = 0)]
        phone: i64,
    },
    /// Overwrite a customer's name, role, email and contacted flag
    Update {
        id: i64,
        #[command(flatten)]
        fields: Fields,
    },
    /// Remove a customer
    Delete { id: i64 },
}

#[derive(Args)]
struct Fields {
    #[arg(long, default_value = "")]
    name: String,
    #[arg(long, default_value = "")]
    role: String,
    #[arg(long, default_value = "")]
    email: String,
    #[arg(long)]
    contacted: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = reqwest::Client::new();
    let base = cli.url.trim_end_matches('/');

    let res = match cli.command {
        Commands::List => client.get(format!("{}/customers", base)).send().await?,
        Commands::Get { id } => client.get(format!("{}/customer/{}", base, id)).send().await?,
        Commands::Create { id, fields, phone } => {
            let customer = Customer {
                id,
                name: fields.name,
                role: fields.role,
                email: fields.email,
                phone,
                contacted: fields.contacted,
            };
            client
                .post(format!("{}/customer", base))
                .json(&customer)
                .send()
                .await?
        }
        Commands::Update { id, fields } => {
            let update = CustomerUpdate {
                name: fields.name,
                role: fields.role,
                email: fields.email,
                contacted: fields.contacted,
            };
            client
                .patch(format!("{}/customer/{}", base, id))
                .json(&update)
                .send()
                .await?
        }
        Commands::Delete { id } => client.delete(format!("{}/customer/{}", base, id)).send().await?,
    };

    print_response(res).await
}

async fn print_response(res: reqwest::Response) -> Result<(), Box<dyn std::error::Error>> {
    let status = res.status();
    if !status.is_success() {
        eprintln!("Error: customer API returned status {}", status);
        if let Ok(text) = res.text().await {
            if !text.is_empty() {
                eprintln!("Response: {}", text);
            }
        }
        std::process::exit(1);
    }

    let json: Value = res.json().await?;
    println!("{}", serde_json::to_string_pretty(&json)?);
    Ok(())
}
