//! CLI administration tool for folio.
//!
//! Provides commands for managing blog posts, viewing content statistics,
//! and performing database operations without requiring HTTP API access.
//!
//! # Usage
//!
//! ```bash
//! # List all posts, drafts included
//! cargo run --bin admin -- post list
//!
//! # Delete a post (and its hosted cover image)
//! cargo run --bin admin -- post delete 42
//!
//! # View content statistics
//! cargo run --bin admin -- stats
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` (required): PostgreSQL connection string
//! - `MEDIA_*` (optional): image host credentials; when present, deleting a
//!   post also removes its hosted cover image
//!
//! # Features
//!
//! - **Post Management**: List and delete posts, including hosted cover cleanup
//! - **Statistics**: View post, experience, and portfolio counts
//! - **Database Tools**: Connection checks and info queries
//! - **Interactive Prompts**: Confirmation dialogs before destructive actions
//! - **Colored Output**: Terminal-friendly formatting using `colored` crate

use folio::application::services::PostService;
use folio::config::Config;
use folio::domain::repositories::PostRepository;
use folio::infrastructure::media::public_id::parse_public_id;
use folio::infrastructure::media::{HttpImageHost, ImageHost, NullImageHost};
use folio::infrastructure::persistence::PgPostRepository;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;
use sqlx::PgPool;
use std::sync::Arc;

/// CLI tool for managing folio.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level command groups.
#[derive(Subcommand)]
enum Commands {
    /// Manage blog posts
    Post {
        #[command(subcommand)]
        action: PostAction,
    },

    /// Show content statistics
    Stats,

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Post management subcommands.
#[derive(Subcommand)]
enum PostAction {
    /// List all posts, drafts included
    List,

    /// Delete a post by id
    Delete {
        /// Post id (see `post list`)
        id: i64,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,

    /// Show database info
    Info,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    // Connect to database
    let database_url = std::env::var("DATABASE_URL").context("DATABASE_URL must be set")?;

    let pool = PgPool::connect(&database_url)
        .await
        .context("Failed to connect to database")?;

    match cli.command {
        Commands::Post { action } => handle_post_action(action, &pool).await?,
        Commands::Stats => handle_stats(&pool).await?,
        Commands::Db { action } => handle_db_action(action, &pool).await?,
    }

    Ok(())
}

/// Dispatches post management commands.
async fn handle_post_action(action: PostAction, pool: &PgPool) -> Result<()> {
    let repo = Arc::new(PgPostRepository::new(Arc::new(pool.clone())));

    match action {
        PostAction::List => {
            list_posts(repo).await?;
        }
        PostAction::Delete { id, yes } => {
            delete_post(repo, id, yes).await?;
        }
    }

    Ok(())
}

/// Lists all posts with publication status.
///
/// # Output Format
///
/// ```text
/// 📋 Posts
///
///   ID   Title                            Slug                         Status
///   ──────────────────────────────────────────────────────────────────────────────
///   1    Shipping a side project          shipping-a-side-project      PUBLISHED
///   2    Draft thoughts                   draft-thoughts               DRAFT
/// ```
async fn list_posts(repo: Arc<PgPostRepository>) -> Result<()> {
    println!("{}", "📋 Posts".bright_blue().bold());
    println!();

    let posts = repo
        .list_all()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to list posts: {}", e))?;

    if posts.is_empty() {
        println!("{}", "  No posts found".yellow());
        println!();
        println!(
            "  Create one in the admin panel at {}",
            "/admin".bright_cyan()
        );
        return Ok(());
    }

    println!(
        "  {:<4} {:<32} {:<28} {:<10}",
        "ID".bright_white().bold(),
        "Title".bright_white().bold(),
        "Slug".bright_white().bold(),
        "Status".bright_white().bold()
    );
    println!("  {}", "─".repeat(78).bright_black());

    for post in &posts {
        let status = if post.published {
            "PUBLISHED".green()
        } else {
            "DRAFT".yellow()
        };

        println!(
            "  {:<4} {:<32} {:<28} {}",
            post.id.to_string().bright_black(),
            truncate(&post.title, 30).cyan(),
            truncate(&post.slug, 26).bright_black(),
            status
        );
    }

    println!();
    println!("  Total: {}", posts.len().to_string().bright_white().bold());
    println!();

    Ok(())
}

/// Deletes a post by id with confirmation prompt.
///
/// # Flow
///
/// 1. Look up the post and display its details
/// 2. Confirm deletion (default: No, unless `--yes` flag)
/// 3. Remove the hosted cover image, best-effort
/// 4. Delete the database row
///
/// The image cleanup runs through the same service path as the HTTP API,
/// so a dead image host never blocks row removal.
async fn delete_post(repo: Arc<PgPostRepository>, id: i64, skip_confirm: bool) -> Result<()> {
    println!("{}", "🗑️  Delete Post".bright_blue().bold());
    println!();

    let post = repo
        .find_by_id(id)
        .await
        .map_err(|e| anyhow::anyhow!("Database error: {}", e))?
        .context("Post not found")?;

    let status = if post.published {
        "PUBLISHED".green()
    } else {
        "DRAFT".yellow()
    };

    println!("  ID:     {}", post.id.to_string().bright_black());
    println!("  Title:  {}", post.title.cyan());
    println!("  Slug:   {}", post.slug.bright_black());
    println!("  Status: {}", status);

    let has_hosted_cover = post
        .cover_image_url
        .as_deref()
        .and_then(parse_public_id)
        .is_some();

    if has_hosted_cover {
        println!();
        println!(
            "{}",
            "⚠️  The cover image will also be removed from the image host".yellow()
        );
    }
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Delete this post?")
            .default(false)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    let service = PostService::new(repo, build_image_host());
    service
        .delete(id)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to delete post: {}", e))?;

    println!();
    println!("{}", "✅ Post deleted".green().bold());
    println!();

    Ok(())
}

/// Builds an image host from `MEDIA_*` environment variables.
///
/// Falls back to the disabled host when credentials are missing or the
/// client fails to build, so `post delete` still removes the row.
fn build_image_host() -> Arc<dyn ImageHost> {
    match Config::load_media_config() {
        Some(media) => match HttpImageHost::new(media) {
            Ok(host) => Arc::new(host),
            Err(e) => {
                println!(
                    "{}",
                    format!("⚠️  Image host unavailable ({}), skipping cover cleanup", e).yellow()
                );
                Arc::new(NullImageHost::new())
            }
        },
        None => Arc::new(NullImageHost::new()),
    }
}

/// Displays content statistics.
///
/// Shows:
/// - Total and published post counts
/// - Number of experience entries
/// - Number of portfolio items
async fn handle_stats(pool: &PgPool) -> Result<()> {
    println!("{}", "📊 Statistics".bright_blue().bold());
    println!();

    let posts_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM posts")
        .fetch_one(pool)
        .await?;

    let published_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM posts WHERE published")
        .fetch_one(pool)
        .await?;

    let experience_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM experience")
        .fetch_one(pool)
        .await?;

    let portfolio_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM portfolio")
        .fetch_one(pool)
        .await?;

    println!(
        "  Posts:              {} ({} published)",
        posts_count.to_string().bright_green().bold(),
        published_count.to_string().green()
    );
    println!(
        "  Experience entries: {}",
        experience_count.to_string().bright_green().bold()
    );
    println!(
        "  Portfolio items:    {}",
        portfolio_count.to_string().bright_green().bold()
    );
    println!();

    Ok(())
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, pool: &PgPool) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "🔍 Checking database connection...".bright_blue());

            sqlx::query("SELECT 1").fetch_one(pool).await?;

            println!("{}", "✅ Database connection OK".green().bold());
        }
        DbAction::Info => {
            println!("{}", "ℹ️  Database Information".bright_blue().bold());
            println!();

            let version: String = sqlx::query_scalar("SELECT version()")
                .fetch_one(pool)
                .await?;

            println!("  PostgreSQL: {}", version.bright_white());
            println!();
        }
    }

    Ok(())
}

/// Truncates a string to `max` characters, appending `…` when cut.
fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let cut: String = s.chars().take(max.saturating_sub(1)).collect();
        format!("{}…", cut)
    }
}
