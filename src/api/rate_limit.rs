// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Per-client rate limiting for HTTP routes
//!
//! Each client address gets a fixed one-minute window that opens with its
//! first request. At most `requests_per_minute` requests are admitted per
//! window; the count resets only once the window has fully elapsed.

use crate::api::ApiError;
use axum::{
    extract::{ConnectInfo, Request, State},
    middleware::Next,
    response::{IntoResponse, Response},
};
use governor::clock::{Clock, DefaultClock, Reference};
use std::collections::HashMap;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use tracing::{debug, warn};

pub const RATE_LIMIT_WINDOW: Duration = Duration::from_secs(60);

/// Checks between sweeps of expired windows
const PRUNE_INTERVAL: u64 = 1024;

#[derive(Debug, Clone, Copy)]
struct Window<I> {
    started: I,
    count: u32,
}

#[derive(Debug)]
struct LimiterState<I> {
    windows: HashMap<IpAddr, Window<I>>,
    checks: u64,
}

fn elapsed<I: Reference>(now: I, since: I) -> Duration {
    Duration::from(now.duration_since(since))
}

/// Fixed-window rate limiter keyed by client address
pub struct ClientRateLimiter<C: Clock = DefaultClock> {
    name: &'static str,
    clock: C,
    state: Mutex<LimiterState<C::Instant>>,
    requests_per_minute: u32,
}

impl ClientRateLimiter {
    /// Creates a limiter admitting `requests_per_minute` per client per window.
    ///
    /// Returns `None` when `requests_per_minute` is 0 (limiting disabled).
    pub fn new(name: &'static str, requests_per_minute: u32) -> Option<Self> {
        Self::with_clock(name, requests_per_minute, DefaultClock::default())
    }
}

impl<C: Clock> ClientRateLimiter<C> {
    pub fn with_clock(name: &'static str, requests_per_minute: u32, clock: C) -> Option<Self> {
        if requests_per_minute == 0 {
            return None;
        }
        Some(Self {
            name,
            clock,
            state: Mutex::new(LimiterState {
                windows: HashMap::new(),
                checks: 0,
            }),
            requests_per_minute,
        })
    }

    /// Records one request from `client`.
    ///
    /// Returns `ApiError::RateLimitExceeded` carrying the whole seconds left
    /// in the client's current window.
    pub async fn check(&self, client: IpAddr) -> Result<(), ApiError> {
        let now = self.clock.now();
        let mut guard = self.state.lock().await;
        let state = &mut *guard;

        state.checks += 1;
        if state.checks % PRUNE_INTERVAL == 0 {
            let before = state.windows.len();
            state
                .windows
                .retain(|_, window| elapsed(now, window.started) < RATE_LIMIT_WINDOW);
            debug!(
                limiter = self.name,
                pruned = before - state.windows.len(),
                tracked = state.windows.len(),
                "Pruned expired rate limit windows"
            );
        }

        let window = state.windows.entry(client).or_insert(Window {
            started: now,
            count: 0,
        });

        let mut in_window = elapsed(now, window.started);
        if in_window >= RATE_LIMIT_WINDOW {
            *window = Window {
                started: now,
                count: 0,
            };
            in_window = Duration::ZERO;
        }

        if window.count >= self.requests_per_minute {
            let remaining = RATE_LIMIT_WINDOW - in_window;
            let retry_after = remaining.as_secs() + u64::from(remaining.subsec_nanos() > 0);
            return Err(ApiError::RateLimitExceeded {
                retry_after: retry_after.max(1),
            });
        }

        window.count += 1;
        Ok(())
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn requests_per_minute(&self) -> u32 {
        self.requests_per_minute
    }
}

impl<C: Clock> std::fmt::Debug for ClientRateLimiter<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientRateLimiter")
            .field("name", &self.name)
            .field("requests_per_minute", &self.requests_per_minute)
            .finish()
    }
}

/// Client address from the connection, or the unspecified address when the
/// service is driven without a socket (in-process tests).
pub fn client_ip(request: &Request) -> IpAddr {
    request
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| addr.ip())
        .unwrap_or(IpAddr::V4(Ipv4Addr::UNSPECIFIED))
}

/// Middleware rejecting requests over the limiter's budget with 429
pub async fn enforce_rate_limit(
    State(limiter): State<Arc<ClientRateLimiter>>,
    request: Request,
    next: Next,
) -> Response {
    let client = client_ip(&request);

    if let Err(err) = limiter.check(client).await {
        warn!(
            client = %client,
            limiter = limiter.name(),
            path = %request.uri().path(),
            "Request rate limited"
        );
        return err.into_response();
    }

    next.run(request).await
}
