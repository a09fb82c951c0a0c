use clap::{Args, Parser, Subcommand};
use serde::Serialize;

use skyview::config::{ApiConfig, PathStyle};
use skyview::error::ApiError;
use skyview::net::types::NewSubscription;
use skyview::router;
use skyview::services::Services;
use skyview::views::Page;
use skyview::views::boards::BoardsView;
use skyview::views::subscription::create_node_message;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error("invalid JSON output: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

#[derive(Parser, Debug)]
#[command(name = "skyview", about = "Skyhash object store and node manager client")]
struct Cli {
    /// Absolute API base URL. Overrides `SKYVIEW_BASE_URL`.
    #[arg(long)]
    base_url: Option<String>,

    /// Object endpoint convention. Overrides `SKYVIEW_PATH_STYLE`.
    #[arg(long)]
    path_style: Option<PathStyle>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render the view for a client path, e.g. `/schema/board`.
    Open {
        #[arg(default_value = "/")]
        path: String,
    },
    /// Print raw JSON from a single API call.
    Api(ApiCommand),
    /// Manage nodes and their subscriptions.
    Node(NodeCommand),
    /// Board actions.
    Boards(BoardsCommand),
}

#[derive(Args, Debug)]
struct ApiCommand {
    #[command(subcommand)]
    command: ApiSubcommand,
}

#[derive(Subcommand, Debug)]
enum ApiSubcommand {
    Stat,
    Schemas,
    Schema { name: String },
    Objects { schema: String },
    Object { schema: String, id: String },
    Sync { id: String },
    Info { id: String },
    Create { schema: String, name: String },
    Boards,
    Manager,
    Nodes,
    Node { node_id: String },
    Subscriptions { node_id: String },
    Subscribers { node_id: String },
    Subscription { node_id: String, pub_key: String },
    Subscriber { node_id: String, pub_key: String },
}

#[derive(Args, Debug)]
struct NodeCommand {
    #[command(subcommand)]
    command: NodeSubcommand,
}

#[derive(Subcommand, Debug)]
enum NodeSubcommand {
    Create {
        /// Hex secret key; a fresh key pair is generated when omitted.
        #[arg(long, default_value = "")]
        sec_key: String,
    },
    Terminate {
        node_id: String,
    },
    Subscribe {
        node_id: String,
        /// `host:port` of the node to subscribe to.
        #[arg(long)]
        address: String,
        /// Expected public key of the remote node; empty accepts any.
        #[arg(long, default_value = "")]
        pub_key: String,
    },
    Unsubscribe {
        node_id: String,
        pub_key: String,
    },
    DropSubscriber {
        node_id: String,
        pub_key: String,
    },
}

#[derive(Args, Debug)]
struct BoardsCommand {
    #[command(subcommand)]
    command: BoardsSubcommand,
}

#[derive(Subcommand, Debug)]
enum BoardsSubcommand {
    /// Request synchronization of the first board.
    Sync,
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    let cli = Cli::parse();
    let mut config = ApiConfig::from_env()?;
    if let Some(base_url) = &cli.base_url {
        config.set_base_url(base_url)?;
    }
    if let Some(style) = cli.path_style {
        config.path_style = style;
    }

    let services = Services::from_config(&config)?;
    tracing::debug!(base_url = %config.base_url, "skyview starting");

    match cli.command {
        Command::Open { path } => run_open(&services, &path).await,
        Command::Api(api) => run_api(&services, api).await,
        Command::Node(node) => run_node(&services, node).await,
        Command::Boards(boards) => run_boards(&services, boards).await,
    }
}

async fn run_open(services: &Services, path: &str) -> Result<(), CliError> {
    let page = Page::load(router::resolve(path), services).await;
    print!("{}", page.render());
    Ok(())
}

async fn run_api(services: &Services, api: ApiCommand) -> Result<(), CliError> {
    let objects = &services.objects;
    let nodes = &services.nodes;
    match api.command {
        ApiSubcommand::Stat => print_json(&objects.get_statistic().await?),
        ApiSubcommand::Schemas => print_json(&objects.get_schema_list().await?),
        ApiSubcommand::Schema { name } => print_json(&objects.get_schema(&name).await?),
        ApiSubcommand::Objects { schema } => print_json(&objects.get_object_list(&schema).await?),
        ApiSubcommand::Object { schema, id } => print_json(&objects.get_object(&schema, &id).await?),
        ApiSubcommand::Sync { id } => {
            objects.sync_object(&id).await?;
            println!("ok");
            Ok(())
        }
        ApiSubcommand::Info { id } => print_json(&objects.object_info(&id).await?),
        ApiSubcommand::Create { schema, name } => print_json(&objects.create(&schema, &name).await?),
        ApiSubcommand::Boards => print_json(&services.boards.get_boards().await?),
        ApiSubcommand::Manager => {
            println!("{}", nodes.manager_info().await?);
            Ok(())
        }
        ApiSubcommand::Nodes => print_json(&nodes.get_nodes().await?),
        ApiSubcommand::Node { node_id } => print_json(&nodes.get_node(&node_id).await?),
        ApiSubcommand::Subscriptions { node_id } => print_json(&nodes.get_subscriptions(&node_id).await?),
        ApiSubcommand::Subscribers { node_id } => print_json(&nodes.get_subscribers(&node_id).await?),
        ApiSubcommand::Subscription { node_id, pub_key } => print_json(&nodes.get_subscription(&node_id, &pub_key).await?),
        ApiSubcommand::Subscriber { node_id, pub_key } => print_json(&nodes.get_subscriber(&node_id, &pub_key).await?),
    }
}

async fn run_node(services: &Services, node: NodeCommand) -> Result<(), CliError> {
    let nodes = &services.nodes;
    let result = match node.command {
        NodeSubcommand::Create { sec_key } => {
            let result = nodes.create_node(&sec_key).await;
            println!("{}", create_node_message(&result));
            result
        }
        NodeSubcommand::Terminate { node_id } => nodes.terminate_node(&node_id).await,
        NodeSubcommand::Subscribe { node_id, address, pub_key } => {
            nodes
                .add_subscription(&node_id, &NewSubscription { ip: address, pub_key })
                .await
        }
        NodeSubcommand::Unsubscribe { node_id, pub_key } => nodes.terminate_subscription(&node_id, &pub_key).await,
        NodeSubcommand::DropSubscriber { node_id, pub_key } => nodes.terminate_subscriber(&node_id, &pub_key).await,
    };
    let response = result?;
    eprintln!("{} ({}): {}", response.code, response.status, response.detail);
    Ok(())
}

async fn run_boards(services: &Services, boards: BoardsCommand) -> Result<(), CliError> {
    match boards.command {
        BoardsSubcommand::Sync => {
            let view = BoardsView::load(services).await;
            match view.sync(services).await? {
                Some(id) => println!("sync requested for {id}"),
                None => println!("no board to sync"),
            }
            Ok(())
        }
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<(), CliError> {
    let rendered = serde_json::to_string_pretty(value)?;
    println!("{rendered}");
    Ok(())
}
