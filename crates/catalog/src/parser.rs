//! Parser for catalog data files.
//!
//! This module handles parsing the ``::``-separated .dat files:
//! - addons.dat: id::slug::name::type::status::apps::weekly_downloads::bayesian_rating::created::last_updated
//! - featured.dat: app::locale::addon_ids
//! - versions.dat: addon_id::version::app::min_app_version::max_app_version::url
//!
//! Application lists are pipe-separated ("firefox|mobile"); featured ID
//! lists are comma-separated. An empty locale field in featured.dat means
//! the entry applies to every locale.

use crate::error::{CatalogError, Result};
use crate::types::*;
use std::fs;
use std::path::Path;

fn read_lines(path: &Path) -> Result<Vec<String>> {
    let content = fs::read_to_string(path)?;
    Ok(content.lines().map(|s| s.to_string()).collect())
}

/// Pull the next ``::`` field off a record, with location context.
fn next_field<'a>(
    parts: &mut impl Iterator<Item = &'a str>,
    file: &str,
    line: usize,
    name: &str,
) -> Result<&'a str> {
    parts.next().ok_or_else(|| CatalogError::ParseError {
        file: file.to_string(),
        line,
        reason: format!("Missing {name}"),
    })
}

fn parse_number<T: std::str::FromStr>(
    value: &str,
    file: &str,
    line: usize,
    name: &str,
) -> Result<T>
where
    T::Err: std::fmt::Display,
{
    value.parse().map_err(|e| CatalogError::ParseError {
        file: file.to_string(),
        line,
        reason: format!("Invalid {name}: {e}"),
    })
}

fn parse_application(s: &str) -> Result<Application> {
    match s {
        "firefox" => Ok(Application::Firefox),
        "thunderbird" => Ok(Application::Thunderbird),
        "seamonkey" => Ok(Application::Seamonkey),
        "sunbird" => Ok(Application::Sunbird),
        "mobile" => Ok(Application::Mobile),
        _ => Err(CatalogError::InvalidValue {
            field: "application".to_string(),
            value: s.to_string(),
        }),
    }
}

fn parse_addon_type(s: &str) -> Result<AddonType> {
    match s {
        "extension" => Ok(AddonType::Extension),
        "theme" => Ok(AddonType::Theme),
        "dictionary" => Ok(AddonType::Dictionary),
        "search" => Ok(AddonType::SearchTool),
        "langpack" => Ok(AddonType::LanguagePack),
        "plugin" => Ok(AddonType::Plugin),
        _ => Err(CatalogError::InvalidValue {
            field: "type".to_string(),
            value: s.to_string(),
        }),
    }
}

fn parse_status(s: &str) -> Result<AddonStatus> {
    match s {
        "incomplete" => Ok(AddonStatus::Incomplete),
        "unreviewed" => Ok(AddonStatus::Unreviewed),
        "pending" => Ok(AddonStatus::Pending),
        "nominated" => Ok(AddonStatus::Nominated),
        "public" => Ok(AddonStatus::Public),
        "disabled" => Ok(AddonStatus::Disabled),
        _ => Err(CatalogError::InvalidValue {
            field: "status".to_string(),
            value: s.to_string(),
        }),
    }
}

/// Parse a pipe-separated application list.
fn parse_apps(s: &str) -> Result<Vec<Application>> {
    s.split('|').map(parse_application).collect()
}

/// Parse the addons.dat file.
pub fn parse_addons(path: &Path) -> Result<Vec<Addon>> {
    const FILE: &str = "addons.dat";
    let lines = read_lines(path)?;
    let mut addons = Vec::new();

    for (idx, line) in lines.iter().enumerate() {
        let line_no = idx + 1;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        let mut parts = trimmed.split("::");
        let id = next_field(&mut parts, FILE, line_no, "id")?;
        let slug = next_field(&mut parts, FILE, line_no, "slug")?;
        let name = next_field(&mut parts, FILE, line_no, "name")?;
        let addon_type = next_field(&mut parts, FILE, line_no, "type")?;
        let status = next_field(&mut parts, FILE, line_no, "status")?;
        let apps = next_field(&mut parts, FILE, line_no, "apps")?;
        let weekly_downloads = next_field(&mut parts, FILE, line_no, "weekly_downloads")?;
        let bayesian_rating = next_field(&mut parts, FILE, line_no, "bayesian_rating")?;
        let created = next_field(&mut parts, FILE, line_no, "created")?;
        let last_updated = next_field(&mut parts, FILE, line_no, "last_updated")?;

        addons.push(Addon {
            id: parse_number(id, FILE, line_no, "id")?,
            slug: slug.to_string(),
            name: name.to_string(),
            addon_type: parse_addon_type(addon_type)?,
            status: parse_status(status)?,
            // Anything not public is implicitly unlisted as well; the
            // listed flag only records the author's opt-out.
            listed: true,
            apps: parse_apps(apps)?,
            weekly_downloads: parse_number(weekly_downloads, FILE, line_no, "weekly_downloads")?,
            bayesian_rating: parse_number(bayesian_rating, FILE, line_no, "bayesian_rating")?,
            created: parse_number(created, FILE, line_no, "created")?,
            last_updated: parse_number(last_updated, FILE, line_no, "last_updated")?,
        });
    }

    Ok(addons)
}

/// Parse the featured.dat file.
pub fn parse_featured(path: &Path) -> Result<Vec<FeaturedEntry>> {
    const FILE: &str = "featured.dat";
    let lines = read_lines(path)?;
    let mut entries = Vec::new();

    for (idx, line) in lines.iter().enumerate() {
        let line_no = idx + 1;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        let mut parts = trimmed.split("::");
        let app = next_field(&mut parts, FILE, line_no, "app")?;
        let locale = next_field(&mut parts, FILE, line_no, "locale")?;
        let ids = next_field(&mut parts, FILE, line_no, "addon_ids")?;

        let addon_ids = ids
            .split(',')
            .filter(|s| !s.is_empty())
            .map(|s| parse_number(s.trim(), FILE, line_no, "addon_id"))
            .collect::<Result<Vec<AddonId>>>()?;

        entries.push(FeaturedEntry {
            app: parse_application(app)?,
            locale: locale.to_string(),
            addon_ids,
        });
    }

    Ok(entries)
}

/// Parse the versions.dat file.
pub fn parse_versions(path: &Path) -> Result<Vec<Version>> {
    const FILE: &str = "versions.dat";
    let lines = read_lines(path)?;
    let mut versions = Vec::new();

    for (idx, line) in lines.iter().enumerate() {
        let line_no = idx + 1;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        let mut parts = trimmed.split("::");
        let addon_id = next_field(&mut parts, FILE, line_no, "addon_id")?;
        let version = next_field(&mut parts, FILE, line_no, "version")?;
        let app = next_field(&mut parts, FILE, line_no, "app")?;
        let min = next_field(&mut parts, FILE, line_no, "min_app_version")?;
        let max = next_field(&mut parts, FILE, line_no, "max_app_version")?;
        let url = next_field(&mut parts, FILE, line_no, "url")?;

        versions.push(Version {
            addon_id: parse_number(addon_id, FILE, line_no, "addon_id")?,
            version: version.to_string(),
            app: parse_application(app)?,
            min_app_version: min.to_string(),
            max_app_version: max.to_string(),
            url: url.to_string(),
        });
    }

    Ok(versions)
}
