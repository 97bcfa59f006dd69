//! Built-in message schemas.
//!
//! Shipped as embedded schema documents in the same shape accepted by
//! [`crate::SchemaRegistry::from_directory`], so deployments can
//! override or extend them with on-disk files.

/// Message 2004: BD2/GPS L1+L2 observables.
///
/// Extended-header observation message carrying per-satellite
/// pseudorange, phase-range, lock-time and carrier-to-noise fields.
pub const MSG_2004: &str = r#"{
    "msg_number": 2004,
    "headers": [
        { "name": "msg_number", "desc": "Message Number", "type": "uint12" },
        { "name": "ref_station_id", "desc": "Reference Station ID", "type": "uint12" },
        { "name": "tow", "desc": "BD2 Epoch Time (TOW)", "type": "uint30" },
        { "name": "sync_flag", "desc": "Synchronous GNSS Flag", "type": "bit1" },
        { "name": "num_bd2_processed", "desc": "No. of BD2 Satellite Signals Processed", "type": "uint5" },
        { "name": "smoothing_indicator", "desc": "BD2 Divergence-free Smoothing Indicator", "type": "bit1" },
        { "name": "smoothing_interval", "desc": "GPS Smoothing Interval", "type": "bit3" }
    ],
    "content_length": 157,
    "content": [
        { "name": "gps_id", "desc": "GPS Satellite ID", "type": "uint6" },
        { "name": "gps_l1_indicator", "desc": "GPS L1 Code Indicator", "type": "bit1" },
        { "name": "gps_l1_pseud", "desc": "GPS L1 Pseudorange", "type": "uint24" },
        { "name": "gps_l1_phaserange", "desc": "GPS L1 PhaseRange - L1 Pseudorange", "type": "int20" },
        { "name": "gps_l1_lock_indicator", "desc": "GPS L1 Lock time Indicator", "type": "uint7" },
        { "name": "gps_l1_ambiguity", "desc": "GPS Integer L1 Pseudorange Modulus Ambiguity", "type": "uint8" },
        { "name": "gps_l1_cnr", "desc": "GPS L1 CNR", "type": "uint8" },
        { "name": "gps_l2_indicator", "desc": "GPS L2 Code Indicator", "type": "bit2" },
        { "name": "gps_l2l1_pseud_diff", "desc": "GPS L2-L1 Pseudorange Difference", "type": "int14" },
        { "name": "gps_l2_phaserange_l1_pseud", "desc": "GPS L2 PhaseRange - L1 Pseudorange", "type": "int20" },
        { "name": "gps_l2_lock_indicator", "desc": "GPS L2 Lock time Indicator", "type": "uint7" },
        { "name": "gps_l2_cnr", "desc": "GPS L2 CNR", "type": "uint8" },
        { "name": "gps_doppler_l1", "desc": "GPS Doppler (L1)", "type": "int32" }
    ]
}"#;

/// Message 2104: BD2 observables, extended header variant.
///
/// Shares the 2004 header and adds the B1/B2/B3 band indicator; its
/// content layout is not declared.
pub const MSG_2104: &str = r#"{
    "msg_number": 2104,
    "headers": [
        { "name": "msg_number", "desc": "Message Number", "type": "uint12" },
        { "name": "ref_station_id", "desc": "Reference Station ID", "type": "uint12" },
        { "name": "tow", "desc": "BD2 Epoch Time (TOW)", "type": "uint30" },
        { "name": "sync_flag", "desc": "Synchronous GNSS Flag", "type": "bit1" },
        { "name": "num_bd2_processed", "desc": "No. of BD2 Satellite Signals Processed", "type": "uint5" },
        { "name": "smoothing_indicator", "desc": "BD2 Divergence-free Smoothing Indicator", "type": "bit1" },
        { "name": "smoothing_interval", "desc": "GPS Smoothing Interval", "type": "bit3" },
        { "name": "bd2_indicator", "desc": "BD2 B1/B2/B3 Indicator", "type": "bit3" }
    ],
    "content_length": 245,
    "content": []
}"#;
