// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Kindred-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Kindred and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Kindred CLI entrypoint.
//!
//! Loads a family document, lays out the neighbourhood of one person and prints the
//! result as JSON on stdout. Logs go to stderr.

use std::error::Error;

use kindred::format::{layout_schema, FamilyDocument};
use kindred::layout::{LayoutConfig, DEFAULT_MAX_DEPTH};
use kindred::logging::{self, LogFormat};
use kindred::model::PersonId;
use kindred::FamilyEngine;

fn print_usage(program: &str) {
    eprintln!(
        "Usage:\n  {program} <family.json> [--focus <id>] [--depth <n>] [--config <file>] [--log-json]\n  {program} --schema\n\nPrints the layout around --focus (default: the document's root) as JSON.\n--depth limits ancestor generations (1-7, default {DEFAULT_MAX_DEPTH}).\n--config reads card sizes and gaps from a JSON file.\n--schema prints the JSON schema of the layout output.\n\nLog filtering follows the {} environment variable (default {}).",
        logging::LOG_ENV,
        logging::DEFAULT_DIRECTIVE,
    );
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
struct CliOptions {
    schema: bool,
    document: Option<String>,
    focus: Option<String>,
    depth: Option<u8>,
    config: Option<String>,
    log_json: bool,
}

fn parse_options(mut args: impl Iterator<Item = String>) -> Result<CliOptions, ()> {
    let mut options = CliOptions::default();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--schema" => {
                if options.schema {
                    return Err(());
                }
                options.schema = true;
            }
            "--focus" => {
                if options.focus.is_some() {
                    return Err(());
                }
                options.focus = Some(args.next().ok_or(())?);
            }
            "--depth" => {
                if options.depth.is_some() {
                    return Err(());
                }
                let raw = args.next().ok_or(())?;
                options.depth = Some(raw.parse().map_err(|_| ())?);
            }
            "--config" => {
                if options.config.is_some() {
                    return Err(());
                }
                options.config = Some(args.next().ok_or(())?);
            }
            "--log-json" => {
                if options.log_json {
                    return Err(());
                }
                options.log_json = true;
            }
            _ if arg.starts_with('-') => return Err(()),
            _ => {
                if options.document.is_some() {
                    return Err(());
                }
                options.document = Some(arg);
            }
        }
    }

    if options.schema == options.document.is_some() {
        return Err(());
    }

    Ok(options)
}

fn main() {
    let result = (|| -> Result<(), Box<dyn Error>> {
        let mut args = std::env::args();
        let program = args.next().unwrap_or_else(|| "kindred".to_owned());

        let options = match parse_options(args) {
            Ok(options) => options,
            Err(()) => {
                print_usage(&program);
                std::process::exit(2);
            }
        };

        logging::init(if options.log_json { LogFormat::Json } else { LogFormat::Pretty });

        if options.schema {
            println!("{}", serde_json::to_string_pretty(&layout_schema())?);
            return Ok(());
        }

        let config = match &options.config {
            Some(path) => LayoutConfig::load(path)?,
            None => LayoutConfig::default(),
        };
        let Some(path) = &options.document else {
            return Ok(());
        };
        let tree = FamilyDocument::load(path)?.to_tree()?;
        tracing::info!(path = %path, persons = tree.len(), "family document loaded");

        let engine = FamilyEngine::new(tree, config);
        let focus = options.focus.as_deref().map(PersonId::new).transpose()?;
        let layout = engine.layout(focus.as_ref(), options.depth.unwrap_or(DEFAULT_MAX_DEPTH))?;

        println!("{}", serde_json::to_string_pretty(&layout)?);
        Ok(())
    })();

    if let Err(err) = result {
        tracing::error!(error = %err, "kindred failed");
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}
