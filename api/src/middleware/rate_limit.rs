//! Rate limiting middleware
//!
//! Fixed-window per-IP limiter in front of every endpoint: 100 requests
//! per 15 minutes by default, the same budget the service has always
//! advertised. State lives in an in-process map; this service runs as a
//! single process, so there is no shared store to coordinate through.

use actix_web::{
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    error::InternalError,
    Error, HttpResponse,
};
use futures_util::future::LocalBoxFuture;
use serde_json::json;
use std::{
    collections::HashMap,
    future::{ready, Ready},
    rc::Rc,
    sync::{Arc, Mutex},
    task::{Context, Poll},
    time::{Duration, Instant},
};

/// Rate limit configuration
#[derive(Debug, Clone)]
pub struct RateLimitConfig {
    /// Requests allowed per window per client IP
    pub max_requests: u32,
    /// Window length
    pub window: Duration,
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            max_requests: 100,
            window: Duration::from_secs(15 * 60),
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct WindowEntry {
    count: u32,
    window_start: Instant,
}

type SharedWindows = Arc<Mutex<HashMap<String, WindowEntry>>>;

/// Rate limiter middleware factory
#[derive(Clone)]
pub struct RateLimiter {
    config: RateLimitConfig,
    windows: SharedWindows,
}

impl RateLimiter {
    /// Create a limiter with the default budget
    pub fn new() -> Self {
        Self::with_config(RateLimitConfig::default())
    }

    /// Create a limiter with a custom budget
    pub fn with_config(config: RateLimitConfig) -> Self {
        Self {
            config,
            windows: Arc::new(Mutex::new(HashMap::new())),
        }
    }
}

impl Default for RateLimiter {
    fn default() -> Self {
        Self::new()
    }
}

/// Records one request for `ip` and reports whether it stayed in budget
fn check_and_count(windows: &SharedWindows, config: &RateLimitConfig, ip: &str) -> bool {
    let now = Instant::now();
    let mut map = match windows.lock() {
        Ok(guard) => guard,
        // A poisoned map only loses counts; never block traffic over it
        Err(poisoned) => poisoned.into_inner(),
    };

    // Opportunistic pruning keeps the map bounded without a sweeper task
    if map.len() > 10_000 {
        let window = config.window;
        map.retain(|_, entry| now.duration_since(entry.window_start) < window);
    }

    let entry = map.entry(ip.to_string()).or_insert(WindowEntry {
        count: 0,
        window_start: now,
    });

    if now.duration_since(entry.window_start) >= config.window {
        entry.count = 0;
        entry.window_start = now;
    }

    entry.count += 1;
    entry.count <= config.max_requests
}

impl<S, B> Transform<S, ServiceRequest> for RateLimiter
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = RateLimiterService<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RateLimiterService {
            service: Rc::new(service),
            config: self.config.clone(),
            windows: Arc::clone(&self.windows),
        }))
    }
}

/// Rate limiter middleware service implementation
pub struct RateLimiterService<S> {
    service: Rc<S>,
    config: RateLimitConfig,
    windows: SharedWindows,
}

impl<S, B> Service<ServiceRequest> for RateLimiterService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&self, ctx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(ctx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);
        let config = self.config.clone();
        let windows = Arc::clone(&self.windows);

        let ip = req
            .connection_info()
            .realip_remote_addr()
            .unwrap_or("unknown")
            .to_string();

        Box::pin(async move {
            if !check_and_count(&windows, &config, &ip) {
                log::warn!("rate limit exceeded for {}", ip);
                let response = HttpResponse::TooManyRequests()
                    .json(json!({ "error": "Too many requests, please try again later" }));
                return Err(InternalError::from_response("rate limit exceeded", response).into());
            }

            service.call(req).await
        })
    }
}
