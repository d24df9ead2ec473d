/// GL debug output - routes driver messages to the engine logger
///
/// With the `gl-debug` feature the KHR_debug callback is installed on device
/// creation. Messages are counted per severity and identical messages are
/// grouped. Without the feature `install` only logs that debug output is
/// unavailable and the statistics stay at zero.

use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Mutex;

use colored::*;
use rustc_hash::FxHashMap;

/// Debug-output message counts
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GlDebugStats {
    /// DEBUG_SEVERITY_HIGH
    pub errors: u32,
    /// DEBUG_SEVERITY_MEDIUM
    pub warnings: u32,
    /// DEBUG_SEVERITY_LOW
    pub info: u32,
    /// DEBUG_SEVERITY_NOTIFICATION
    pub notifications: u32,
}

impl GlDebugStats {
    /// Total number of messages
    pub fn total(&self) -> u32 {
        self.errors + self.warnings + self.info + self.notifications
    }
}

/// Global statistics (atomic counters, the callback may run on any thread)
static GL_DEBUG_STATS: GlDebugStatsTracker = GlDebugStatsTracker::new();

/// Occurrences of each distinct message text
static MESSAGE_TRACKER: Mutex<Option<FxHashMap<String, u32>>> = Mutex::new(None);

struct GlDebugStatsTracker {
    errors: AtomicU32,
    warnings: AtomicU32,
    info: AtomicU32,
    notifications: AtomicU32,
}

impl GlDebugStatsTracker {
    const fn new() -> Self {
        Self {
            errors: AtomicU32::new(0),
            warnings: AtomicU32::new(0),
            info: AtomicU32::new(0),
            notifications: AtomicU32::new(0),
        }
    }

    fn counter(&self, severity: u32) -> &AtomicU32 {
        match severity {
            glow::DEBUG_SEVERITY_HIGH => &self.errors,
            glow::DEBUG_SEVERITY_MEDIUM => &self.warnings,
            glow::DEBUG_SEVERITY_LOW => &self.info,
            _ => &self.notifications,
        }
    }

    fn get_stats(&self) -> GlDebugStats {
        GlDebugStats {
            errors: self.errors.load(Ordering::Relaxed),
            warnings: self.warnings.load(Ordering::Relaxed),
            info: self.info.load(Ordering::Relaxed),
            notifications: self.notifications.load(Ordering::Relaxed),
        }
    }

    fn reset(&self) {
        self.errors.store(0, Ordering::Relaxed);
        self.warnings.store(0, Ordering::Relaxed);
        self.info.store(0, Ordering::Relaxed);
        self.notifications.store(0, Ordering::Relaxed);
    }
}

/// Current debug-output statistics
pub fn gl_debug_stats() -> GlDebugStats {
    GL_DEBUG_STATS.get_stats()
}

/// Reset statistics and message grouping
pub fn reset_gl_debug_stats() {
    GL_DEBUG_STATS.reset();
    if let Ok(mut tracker) = MESSAGE_TRACKER.lock() {
        *tracker = None;
    }
}

/// Print a colored statistics report to stdout
pub fn print_gl_debug_report() {
    let stats = gl_debug_stats();

    if stats.total() == 0 {
        println!("\n{}", "✓ No GL debug messages".green().bold());
        return;
    }

    println!("\n{}", "=== GL Debug Output Report ===".bright_blue().bold());
    if stats.errors > 0 {
        println!("  {} {}", "Errors:".red().bold(), stats.errors);
    }
    if stats.warnings > 0 {
        println!("  {} {}", "Warnings:".yellow().bold(), stats.warnings);
    }
    if stats.info > 0 {
        println!("  {} {}", "Info:".cyan(), stats.info);
    }
    if stats.notifications > 0 {
        println!("  {} {}", "Notifications:".bright_black(), stats.notifications);
    }
    println!("  {} {}", "Total:".white().bold(), stats.total());

    if let Ok(tracker) = MESSAGE_TRACKER.lock() {
        if let Some(messages) = tracker.as_ref() {
            let repeated = messages.values().filter(|&&count| count > 1).count();
            if repeated > 0 {
                println!("\n  {} {} message(s) appeared multiple times", "Note:".bright_black(), repeated);
            }
        }
    }
}

/// Log a one-line summary when messages were received
pub(crate) fn log_summary() {
    let stats = gl_debug_stats();
    if stats.total() > 0 {
        learn_gl::engine_info!(
            "learngl::opengl",
            "GL debug output: {} error(s), {} warning(s), {} info, {} notification(s)",
            stats.errors,
            stats.warnings,
            stats.info,
            stats.notifications
        );
    }
}

/// Record one message; returns how many times this text has been seen
fn track(severity: u32, message: &str) -> u32 {
    GL_DEBUG_STATS.counter(severity).fetch_add(1, Ordering::Relaxed);
    match MESSAGE_TRACKER.lock() {
        Ok(mut tracker) => {
            let count = tracker
                .get_or_insert_with(FxHashMap::default)
                .entry(message.to_string())
                .or_insert(0);
            *count += 1;
            *count
        }
        Err(_) => 1,
    }
}

#[cfg_attr(not(feature = "gl-debug"), allow(dead_code))]
/// Forward one driver message to the engine logger
///
/// Repeats of the same text are only logged on their first occurrence.
pub(crate) fn handle_message(source: u32, message_type: u32, id: u32, severity: u32, message: &str) {
    if track(severity, message) > 1 {
        return;
    }

    const LOG_SOURCE: &str = "learngl::opengl::debug";
    let text = format!(
        "[{}/{} #{}] {}",
        source_name(source),
        type_name(message_type),
        id,
        message.trim_end()
    );
    match severity {
        glow::DEBUG_SEVERITY_HIGH => learn_gl::engine_error!(LOG_SOURCE, "{}", text),
        glow::DEBUG_SEVERITY_MEDIUM => learn_gl::engine_warn!(LOG_SOURCE, "{}", text),
        glow::DEBUG_SEVERITY_LOW => learn_gl::engine_debug!(LOG_SOURCE, "{}", text),
        _ => learn_gl::engine_trace!(LOG_SOURCE, "{}", text),
    }
}

fn source_name(source: u32) -> &'static str {
    match source {
        glow::DEBUG_SOURCE_API => "API",
        glow::DEBUG_SOURCE_WINDOW_SYSTEM => "WindowSystem",
        glow::DEBUG_SOURCE_SHADER_COMPILER => "ShaderCompiler",
        glow::DEBUG_SOURCE_THIRD_PARTY => "ThirdParty",
        glow::DEBUG_SOURCE_APPLICATION => "Application",
        _ => "Other",
    }
}

fn type_name(message_type: u32) -> &'static str {
    match message_type {
        glow::DEBUG_TYPE_ERROR => "Error",
        glow::DEBUG_TYPE_DEPRECATED_BEHAVIOR => "Deprecated",
        glow::DEBUG_TYPE_UNDEFINED_BEHAVIOR => "Undefined",
        glow::DEBUG_TYPE_PORTABILITY => "Portability",
        glow::DEBUG_TYPE_PERFORMANCE => "Performance",
        glow::DEBUG_TYPE_MARKER => "Marker",
        _ => "Other",
    }
}

/// Install the debug-output callback on `gl`
#[cfg(feature = "gl-debug")]
pub(crate) unsafe fn install(gl: &mut glow::Context) {
    use glow::HasContext;

    if !gl.supports_debug() {
        learn_gl::engine_warn!("learngl::opengl", "GL debug output requested but not supported by the context");
        return;
    }
    reset_gl_debug_stats();
    gl.enable(glow::DEBUG_OUTPUT);
    gl.enable(glow::DEBUG_OUTPUT_SYNCHRONOUS);
    gl.debug_message_callback(handle_message);
    learn_gl::engine_info!("learngl::opengl", "GL debug output enabled");
}

#[cfg(not(feature = "gl-debug"))]
pub(crate) unsafe fn install(_gl: &mut glow::Context) {
    learn_gl::engine_debug!(
        "learngl::opengl",
        "GL debug output requested; rebuild with the `gl-debug` feature to enable it"
    );
}

#[cfg(test)]
#[path = "debug_tests.rs"]
mod tests;
