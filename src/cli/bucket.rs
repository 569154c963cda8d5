//
//  adacord-cli
//  cli/bucket.rs
//
//  Created by Ngonidzashe Mangudya on 2026/03/02.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! Bucket commands: create, list, view, delete, query.

use anyhow::Result;
use clap::{Args, Subcommand};
use serde::Serialize;

use crate::api::Bucket;
use crate::output::{OutputFormat, OutputWriter, TableOutput};
use crate::util::truncate;

use super::GlobalOptions;

/// Manage buckets
#[derive(Args, Debug)]
pub struct BucketCommand {
    #[command(subcommand)]
    pub command: BucketSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum BucketSubcommand {
    /// Create a new bucket
    Create(CreateArgs),

    /// List your buckets
    #[command(visible_alias = "ls")]
    List,

    /// View one bucket
    View(ViewArgs),

    /// Delete a bucket
    Delete(DeleteArgs),

    /// Query a bucket with SQL
    Query(QueryArgs),
}

#[derive(Args, Debug)]
pub struct CreateArgs {
    /// What the bucket is for
    #[arg(long)]
    pub description: String,

    /// Accept rows without a schema
    #[arg(long)]
    pub schemaless: bool,
}

#[derive(Args, Debug)]
pub struct ViewArgs {
    /// Bucket uuid or name
    pub bucket: String,
}

#[derive(Args, Debug)]
pub struct DeleteArgs {
    /// Bucket uuid or name
    pub bucket: String,
}

#[derive(Args, Debug)]
pub struct QueryArgs {
    /// Bucket uuid or name
    #[arg(long)]
    pub bucket: String,

    /// SQL query to run
    #[arg(long)]
    pub query: String,
}

// Display type mirroring the original's uuid/name/description/url grid.
#[derive(Debug, Serialize)]
struct BucketListItem {
    uuid: String,
    name: String,
    description: String,
    url: String,
}

impl From<Bucket> for BucketListItem {
    fn from(bucket: Bucket) -> Self {
        Self {
            uuid: bucket.uuid,
            name: bucket.name,
            description: truncate(bucket.description.as_deref().unwrap_or("-"), 40),
            url: bucket.url,
        }
    }
}

impl TableOutput for BucketListItem {
    fn headers() -> Vec<&'static str> {
        vec!["uuid", "name", "description", "url"]
    }

    fn row(&self) -> Vec<String> {
        vec![
            self.uuid.clone(),
            self.name.clone(),
            self.description.clone(),
            self.url.clone(),
        ]
    }
}

impl BucketCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        match &self.command {
            BucketSubcommand::Create(args) => self.create(args, global).await,
            BucketSubcommand::List => self.list(global).await,
            BucketSubcommand::View(args) => self.view(args, global).await,
            BucketSubcommand::Delete(args) => self.delete(args, global).await,
            BucketSubcommand::Query(args) => self.query(args, global).await,
        }
    }

    async fn create(&self, args: &CreateArgs, global: &GlobalOptions) -> Result<()> {
        let writer = OutputWriter::new(OutputFormat::from_json_flag(global.json));
        let api = global.api()?;

        let bucket = api.create_bucket(&args.description, args.schemaless).await?;

        writer.success("Bucket created, you can start sending data 🚀");
        writer.write(&BucketListItem::from(bucket))?;
        Ok(())
    }

    async fn list(&self, global: &GlobalOptions) -> Result<()> {
        let writer = OutputWriter::new(OutputFormat::from_json_flag(global.json));
        let api = global.api()?;

        let buckets = api.buckets().list().await?;
        if buckets.is_empty() && !writer.is_json() {
            println!("No buckets yet. Create one with 'adacord bucket create'.");
            return Ok(());
        }

        let items: Vec<BucketListItem> = buckets.into_iter().map(Into::into).collect();
        writer.write_list(&items)?;
        Ok(())
    }

    async fn view(&self, args: &ViewArgs, global: &GlobalOptions) -> Result<()> {
        let writer = OutputWriter::new(OutputFormat::from_json_flag(global.json));
        let api = global.api()?;

        let bucket = api.get_bucket(&args.bucket).await?;
        writer.write(&BucketListItem::from(bucket))?;
        Ok(())
    }

    async fn delete(&self, args: &DeleteArgs, global: &GlobalOptions) -> Result<()> {
        let writer = OutputWriter::new(OutputFormat::from_json_flag(global.json));
        let api = global.api()?;

        let confirmation = api.buckets().delete(&args.bucket).await?;
        if writer.is_json() {
            writer.write_json(&confirmation)?;
        } else {
            writer.success(&format!("Bucket {} deleted.", args.bucket));
        }
        Ok(())
    }

    async fn query(&self, args: &QueryArgs, global: &GlobalOptions) -> Result<()> {
        let writer = OutputWriter::new(OutputFormat::from_json_flag(global.json));
        let api = global.api()?;

        let result = api.buckets().query(&args.bucket, &args.query).await?;
        writer.write_json(&result)?;
        Ok(())
    }
}
