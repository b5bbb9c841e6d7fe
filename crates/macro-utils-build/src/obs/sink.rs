//! Generation sink boundary.
//!
//! Generators never touch the report state directly. Everything flows through
//! `GenerationEvent` and `GenerationSink`, and a sink never influences the
//! tokens a generator emits.

use crate::codegen::EnumMode;
use std::cell::RefCell;

thread_local! {
    static SINK_OVERRIDE: RefCell<Option<*const dyn GenerationSink>> = const { RefCell::new(None) };
    static REPORT: RefCell<GenerationReport> = RefCell::new(GenerationReport::default());
}

///
/// GenerationEvent
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum GenerationEvent<'a> {
    EnumGenerated {
        name: &'a str,
        mode: EnumMode,
        enumerators: usize,
    },
    RecordGenerated {
        name: &'a str,
        fields: usize,
    },
    DuplicateDiscriminant {
        name: &'a str,
        value: i64,
        winner: &'a str,
        shadowed: &'a str,
    },
    OpaqueInitializer {
        name: &'a str,
        enumerator: &'a str,
    },
}

///
/// GenerationSink
///

pub trait GenerationSink {
    fn record(&self, event: GenerationEvent<'_>);
}

///
/// GenerationReport
/// per-thread counters kept by the default sink
///

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct GenerationReport {
    pub enums: u64,
    pub local_enums: u64,
    pub enum_strings: u64,
    pub records: u64,
    pub enumerators: u64,
    pub fields: u64,
    pub duplicate_discriminants: u64,
    pub opaque_initializers: u64,
}

/// GlobalGenerationSink
/// Default sink that folds events into the per-thread report.
/// Acts as the concrete sink when no scoped override is installed.

pub(crate) struct GlobalGenerationSink;

impl GenerationSink for GlobalGenerationSink {
    fn record(&self, event: GenerationEvent<'_>) {
        REPORT.with(|report| {
            let mut r = report.borrow_mut();

            match event {
                GenerationEvent::EnumGenerated {
                    mode, enumerators, ..
                } => {
                    let counter = match mode {
                        EnumMode::Declare => &mut r.enums,
                        EnumMode::Local => &mut r.local_enums,
                        EnumMode::Strings => &mut r.enum_strings,
                    };
                    *counter = counter.saturating_add(1);
                    r.enumerators = r.enumerators.saturating_add(enumerators as u64);
                }
                GenerationEvent::RecordGenerated { fields, .. } => {
                    r.records = r.records.saturating_add(1);
                    r.fields = r.fields.saturating_add(fields as u64);
                }
                GenerationEvent::DuplicateDiscriminant { .. } => {
                    r.duplicate_discriminants = r.duplicate_discriminants.saturating_add(1);
                }
                GenerationEvent::OpaqueInitializer { .. } => {
                    r.opaque_initializers = r.opaque_initializers.saturating_add(1);
                }
            }
        });
    }
}

pub(crate) const GLOBAL_GENERATION_SINK: GlobalGenerationSink = GlobalGenerationSink;

pub(crate) fn record(event: GenerationEvent<'_>) {
    let override_ptr = SINK_OVERRIDE.with(|cell| *cell.borrow());
    if let Some(ptr) = override_ptr {
        // SAFETY:
        // - `ptr` was produced from a live `&dyn GenerationSink` in `with_sink`.
        // - `with_sink` restores the previous pointer on every exit, unwinding
        //   included, so `ptr` never outlives the borrow it came from.
        // - `record` dispatches synchronously and does not keep `ptr`.
        unsafe { (&*ptr).record(event) };
    } else {
        GLOBAL_GENERATION_SINK.record(event);
    }
}

/// Snapshot the current thread's generation report.
#[must_use]
pub fn generation_report() -> GenerationReport {
    REPORT.with(|report| report.borrow().clone())
}

/// Reset the current thread's generation report.
pub fn generation_report_reset() {
    REPORT.with(|report| *report.borrow_mut() = GenerationReport::default());
}

/// Run a closure with a temporary sink override.
pub fn with_sink<T>(sink: &dyn GenerationSink, f: impl FnOnce() -> T) -> T {
    struct Guard(Option<*const dyn GenerationSink>);

    impl Drop for Guard {
        fn drop(&mut self) {
            SINK_OVERRIDE.with(|cell| {
                *cell.borrow_mut() = self.0;
            });
        }
    }

    // SAFETY:
    // - the pointer is installed only for the dynamic extent of `f`.
    // - `Guard` restores the previous slot on all exits, including panic.
    // - only shared access is ever materialized from the pointer.
    let sink_ptr = unsafe {
        std::mem::transmute::<&dyn GenerationSink, *const dyn GenerationSink>(sink)
    };
    let prev = SINK_OVERRIDE.with(|cell| cell.borrow_mut().replace(sink_ptr));
    let _guard = Guard(prev);

    f()
}
