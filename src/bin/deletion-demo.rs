use anyhow::Result;
use clap::Parser;
use deletion_policy::deleters::StubInstanceDeleter;
use deletion_policy::reporters::WriteAgentReporter;
use deletion_policy::{is_instance_not_found, InstanceId, MachineClient, PolicyKind};
use log::{error, info, warn};
use std::process::ExitCode;

/// Stop instances through a deletion policy against a stub provider.
///
/// Without `--policy` or `--id` a random instance is stopped strictly, then the nil instance is
/// stopped tolerantly.
#[derive(Debug, Parser)]
#[command(name = "deletion-demo", version, about)]
struct Args {
    /// Policy to stop the instance with (strict or tolerant).
    #[arg(long, env = "DELETION_POLICY")]
    policy: Option<PolicyKind>,

    /// Instance to stop. Defaults to a fresh random id.
    #[arg(long)]
    id: Option<InstanceId>,

    /// Enable debug logging.
    #[arg(short, long)]
    verbose: bool,
}

type Client = MachineClient<StubInstanceDeleter, WriteAgentReporter<std::io::Stdout>>;

fn run_demo(client: &mut Client) -> Result<()> {
    // normal downscale: any failure matters
    client.set_stop_policy(PolicyKind::Strict);
    client.stop_instance(InstanceId::new())?;

    // stuck agent: the instance may already be gone
    client.set_stop_policy(PolicyKind::Tolerant);
    // unreachable with the stub deleter, guards deleters whose not found escapes the policy
    if let Err(err) = client.stop_instance(InstanceId::NIL) {
        if !is_instance_not_found(&err) {
            return Err(err);
        }
        warn!("could not find vm to delete: {err:#}");
    }

    Ok(())
}

fn run(args: &Args) -> Result<()> {
    let mut client = MachineClient::new(StubInstanceDeleter, WriteAgentReporter::stdout());

    if args.policy.is_none() && args.id.is_none() {
        return run_demo(&mut client);
    }

    let policy = args.policy.unwrap_or_default();
    let id = args.id.unwrap_or_else(InstanceId::new);
    info!("stopping instance {id} with {policy} policy");
    client.set_stop_policy(policy).stop_instance(id)
}

fn main() -> ExitCode {
    let args = Args::parse();

    let log_level = if args.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    if let Err(err) = run(&args) {
        error!("run error: {err:#}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
