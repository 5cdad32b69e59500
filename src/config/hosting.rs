// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Hosting platform detection, used for startup logging only

use std::env;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostingPlatform {
    Render,
    Railway,
    Heroku,
    Local,
}

impl HostingPlatform {
    /// Detects the platform from the process environment
    pub fn detect() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Detects the platform through an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if lookup("RENDER").is_some() {
            HostingPlatform::Render
        } else if lookup("RAILWAY_ENVIRONMENT").is_some() {
            HostingPlatform::Railway
        } else if lookup("DYNO").is_some() {
            HostingPlatform::Heroku
        } else {
            HostingPlatform::Local
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            HostingPlatform::Render => "🌐 Detected Render.com hosting",
            HostingPlatform::Railway => "🚂 Detected Railway hosting",
            HostingPlatform::Heroku => "🟣 Detected Heroku hosting",
            HostingPlatform::Local => "💻 Running locally",
        }
    }
}
