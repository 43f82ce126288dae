use std::env;

use anyhow::{anyhow, Context};
use dscloud::prelude::*;

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = env::args().collect();
    let rt = tokio::runtime::Runtime::new()?;
    if args.len() < 2 {
        print_usage(&args[0]);
        return Err(anyhow!("No arguments has been provided"));
    }
    match args[1].as_str() {
        "source" => {
            dotenv::from_filename("source.env").ok();
            let settings = SourceSettings::from_env()?;
            let scope = ArmScope::new(&settings.subscription_id, &settings.resource_group);
            let azure = AzureProvider::new(rt.handle(), scope, settings.arm_token.clone())?;
            provision_source(&azure, &settings)
                .context("Could not provision the source data share")
        }
        "dest" => {
            dotenv::dotenv().ok();
            let settings = DestSettings::from_env()?;
            let scope = ArmScope::new(&settings.subscription_id, &settings.resource_group);
            let azure = AzureProvider::new(rt.handle(), scope, settings.arm_token.clone())?;
            provision_destination(&azure, &settings)
                .context("Could not provision the destination data share")
        }
        other => {
            print_usage(&args[0]);
            Err(anyhow!("Invalid command: {}", other))
        }
    }
}

fn print_usage(cmd: &str) {
    println!("Usage: {} <command>", cmd);
    println!("Commands:");
    println!("  source   Provision the provider side: share, dataset, schedule, invitations");
    println!("  dest     Provision the consumer side: subscription, mapping, trigger");
}
