//
//  adacord-cli
//  cli/token.rs
//
//  Created by Ngonidzashe Mangudya on 2026/03/02.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! API token commands, account-scoped or scoped to one bucket.

use anyhow::Result;
use clap::{Args, Subcommand};
use serde::Serialize;

use crate::api::ApiToken;
use crate::output::{OutputFormat, OutputWriter, TableOutput};
use crate::util::format_timestamp;

use super::GlobalOptions;

/// Manage API tokens
#[derive(Args, Debug)]
pub struct TokenCommand {
    #[command(subcommand)]
    pub command: TokenSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum TokenSubcommand {
    /// Create a new token
    Create(CreateArgs),

    /// List tokens
    #[command(visible_alias = "ls")]
    List(ListArgs),

    /// Revoke a token
    Delete(DeleteArgs),
}

#[derive(Args, Debug)]
pub struct CreateArgs {
    /// Scope the token to one bucket (account-wide when omitted)
    #[arg(long)]
    pub bucket: Option<String>,

    /// What the token is for
    #[arg(long)]
    pub description: Option<String>,
}

#[derive(Args, Debug)]
pub struct ListArgs {
    /// List tokens of one bucket (account-wide when omitted)
    #[arg(long)]
    pub bucket: Option<String>,
}

#[derive(Args, Debug)]
pub struct DeleteArgs {
    /// Uuid of the token to revoke
    pub token_uuid: String,

    /// The bucket the token is scoped to (account-wide when omitted)
    #[arg(long)]
    pub bucket: Option<String>,
}

#[derive(Debug, Serialize)]
struct TokenListItem {
    uuid: String,
    token: String,
    description: String,
    created_at: String,
}

impl From<ApiToken> for TokenListItem {
    fn from(token: ApiToken) -> Self {
        Self {
            uuid: token.uuid,
            token: token.token,
            description: token.description.unwrap_or_else(|| "-".to_string()),
            created_at: format_timestamp(&token.created_at),
        }
    }
}

impl TableOutput for TokenListItem {
    fn headers() -> Vec<&'static str> {
        vec!["uuid", "token", "description", "created"]
    }

    fn row(&self) -> Vec<String> {
        vec![
            self.uuid.clone(),
            self.token.clone(),
            self.description.clone(),
            self.created_at.clone(),
        ]
    }
}

impl TokenCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        match &self.command {
            TokenSubcommand::Create(args) => self.create(args, global).await,
            TokenSubcommand::List(args) => self.list(args, global).await,
            TokenSubcommand::Delete(args) => self.delete(args, global).await,
        }
    }

    async fn create(&self, args: &CreateArgs, global: &GlobalOptions) -> Result<()> {
        let writer = OutputWriter::new(OutputFormat::from_json_flag(global.json));
        let api = global.api()?;
        let description = args.description.as_deref();

        let token = match &args.bucket {
            Some(bucket) => api.buckets().create_token(bucket, description).await?,
            None => api.api_tokens().create(description).await?,
        };

        writer.success("Token created. The secret value is shown only once:");
        writer.write(&TokenListItem::from(token))?;
        Ok(())
    }

    async fn list(&self, args: &ListArgs, global: &GlobalOptions) -> Result<()> {
        let writer = OutputWriter::new(OutputFormat::from_json_flag(global.json));
        let api = global.api()?;

        let tokens = match &args.bucket {
            Some(bucket) => api.buckets().get_tokens(bucket).await?,
            None => api.api_tokens().list().await?,
        };

        if tokens.is_empty() && !writer.is_json() {
            println!("No tokens found.");
            return Ok(());
        }

        let items: Vec<TokenListItem> = tokens.into_iter().map(Into::into).collect();
        writer.write_list(&items)?;
        Ok(())
    }

    async fn delete(&self, args: &DeleteArgs, global: &GlobalOptions) -> Result<()> {
        let writer = OutputWriter::new(OutputFormat::from_json_flag(global.json));
        let api = global.api()?;

        let confirmation = match &args.bucket {
            Some(bucket) => {
                api.buckets()
                    .delete_token(bucket, &args.token_uuid)
                    .await?
            }
            None => api.api_tokens().delete(&args.token_uuid).await?,
        };

        if writer.is_json() {
            writer.write_json(&confirmation)?;
        } else {
            writer.success(&format!("Token {} revoked.", args.token_uuid));
        }
        Ok(())
    }
}
