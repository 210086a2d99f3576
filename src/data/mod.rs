/// Data layer: request loading, raw VNA decoding, trace demultiplexing, and
/// sample records.
///
/// Architecture:
/// ```text
///  vna_freq ("#N<hdr>f0,f1,...,")     vna_trace ("#N<hdr>r0,i0,r1,i1,...,")
///        │                                   │
///        ▼                                   ▼
///   ┌──────────┐                        ┌──────────┐
///   │ decoder  │  strip header, parse   │ decoder  │
///   └──────────┘                        └──────────┘
///        │                                   │
///        │                                   ▼
///        │                              ┌──────────┐
///        │                              │  trace   │  deinterleave → (re, im)
///        │                              └──────────┘
///        ▼                                   ▼
///   ┌──────────────────────────────────────────────┐
///   │ record   metadata + zip(freq, re, im) → Sample │
///   └──────────────────────────────────────────────┘
/// ```

pub mod decoder;
pub mod loader;
pub mod model;
pub mod record;
pub mod trace;
