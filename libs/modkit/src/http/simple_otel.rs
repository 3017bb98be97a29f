//! Minimal W3C Trace Context propagation for outgoing requests.
//!
//! Header manipulation is done by hand so that the HTTP adapters do not pull
//! in the OpenTelemetry SDK.

use http::{HeaderMap, HeaderName, HeaderValue};
use tracing::Span;

/// W3C Trace Context header name
pub const TRACEPARENT: &str = "traceparent";

/// Parsed `traceparent` value: `00-<trace-id>-<span-id>-<flags>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraceParent {
    pub trace_id: String,
    pub span_id: String,
    pub sampled: bool,
}

impl TraceParent {
    /// Fresh sampled context with random ids.
    pub fn random() -> Self {
        Self {
            trace_id: format!("{:032x}", rand::random::<u128>()),
            span_id: format!("{:016x}", rand::random::<u64>()),
            sampled: true,
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        let mut parts = raw.trim().split('-');
        let (version, trace_id, span_id, flags) =
            (parts.next()?, parts.next()?, parts.next()?, parts.next()?);
        if version != "00" || parts.next().is_some() {
            return None;
        }
        let hex = |s: &str, len: usize| s.len() == len && s.bytes().all(|b| b.is_ascii_hexdigit());
        if !hex(trace_id, 32) || !hex(span_id, 16) || !hex(flags, 2) {
            return None;
        }
        let flags = u8::from_str_radix(flags, 16).ok()?;
        Some(Self {
            trace_id: trace_id.to_ascii_lowercase(),
            span_id: span_id.to_ascii_lowercase(),
            sampled: flags & 0x01 == 0x01,
        })
    }

    pub fn to_header_value(&self) -> String {
        let flags = if self.sampled { "01" } else { "00" };
        format!("00-{}-{}-{}", self.trace_id, self.span_id, flags)
    }
}

/// Read the `traceparent` header, if present and well-formed.
pub fn extract_trace_parent(headers: &HeaderMap) -> Option<TraceParent> {
    headers
        .get(TRACEPARENT)
        .and_then(|v| v.to_str().ok())
        .and_then(TraceParent::parse)
}

/// Inject a trace context into outgoing headers and record the trace id on `span`.
///
/// An existing `traceparent` keeps its trace id; only the span id is renewed.
pub fn inject_trace_context(headers: &mut HeaderMap, span: &Span) -> TraceParent {
    let fresh = TraceParent::random();
    let ctx = match extract_trace_parent(headers) {
        Some(parent) => TraceParent {
            trace_id: parent.trace_id,
            ..fresh
        },
        None => fresh,
    };

    if let Ok(value) = HeaderValue::from_str(&ctx.to_header_value()) {
        headers.insert(HeaderName::from_static(TRACEPARENT), value);
    }
    span.record("trace_id", ctx.trace_id.as_str());
    ctx
}
