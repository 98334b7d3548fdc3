use crate::{
    eval::evaluator::FrameState,
    foundation::math::Fnv1a64,
    timeline::{markers::LabelPlacement, scheduler::SegmentPhase},
};

/// 128-bit identity of a [`FrameState`], built from two independently seeded FNV-1a lanes.
///
/// Equal fingerprints mean bit-identical frame states, so a renderer may reuse pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct FrameFingerprint {
    /// First lane.
    pub hi: u64,
    /// Second lane.
    pub lo: u64,
}

/// Fingerprint everything visible in `state` (the frame index itself is excluded).
pub fn fingerprint_frame(state: &FrameState) -> FrameFingerprint {
    let mut a = Fnv1a64::new_default();
    let mut b = Fnv1a64::new(0x9ae1_6a3b_2f90_404f);

    match state.phase {
        SegmentPhase::PreDelay => write_u8_pair(&mut a, &mut b, 0),
        SegmentPhase::InSegment { index } => {
            write_u8_pair(&mut a, &mut b, 1);
            write_u64_pair(&mut a, &mut b, index as u64);
        }
        SegmentPhase::Done => write_u8_pair(&mut a, &mut b, 2),
    }
    write_f64_pair(&mut a, &mut b, state.progress);

    let cam = &state.camera;
    write_f64_pair(&mut a, &mut b, cam.center.latitude);
    write_f64_pair(&mut a, &mut b, cam.center.longitude);
    write_u64_pair(&mut a, &mut b, u64::from(cam.zoom));
    write_f64_pair(&mut a, &mut b, cam.pixel_offset.x);
    write_f64_pair(&mut a, &mut b, cam.pixel_offset.y);

    write_u64_pair(&mut a, &mut b, state.tiles.len() as u64);
    for t in &state.tiles {
        write_u64_pair(&mut a, &mut b, u64::from(t.column));
        write_u64_pair(&mut a, &mut b, u64::from(t.row));
        write_f64_pair(&mut a, &mut b, t.position.x);
        write_f64_pair(&mut a, &mut b, t.position.y);
    }

    write_u64_pair(&mut a, &mut b, state.markers.len() as u64);
    for m in &state.markers {
        write_str_pair(&mut a, &mut b, &m.label);
        write_f64_pair(&mut a, &mut b, m.offset.x);
        write_f64_pair(&mut a, &mut b, m.offset.y);
        write_f64_pair(&mut a, &mut b, m.opacity);
        write_f64_pair(&mut a, &mut b, m.scale);
        write_u8_pair(
            &mut a,
            &mut b,
            match m.placement {
                LabelPlacement::Above => 0,
                LabelPlacement::Below => 1,
            },
        );
    }

    write_u64_pair(&mut a, &mut b, state.routes.len() as u64);
    for r in &state.routes {
        write_u64_pair(&mut a, &mut b, r.segment as u64);
        write_f64_pair(&mut a, &mut b, r.anchor.x);
        write_f64_pair(&mut a, &mut b, r.anchor.y);
        write_f64_pair(&mut a, &mut b, r.reveal);
        // Geometry is fixed per segment for a journey; its length identifies it cheaply.
        write_u64_pair(&mut a, &mut b, r.geometry.points().len() as u64);
        write_f64_pair(&mut a, &mut b, r.geometry.total_length());
    }

    FrameFingerprint {
        hi: a.finish(),
        lo: b.finish(),
    }
}

fn write_str_pair(a: &mut Fnv1a64, b: &mut Fnv1a64, s: &str) {
    write_u64_pair(a, b, s.len() as u64);
    a.write_bytes(s.as_bytes());
    b.write_bytes(s.as_bytes());
}

fn write_u8_pair(a: &mut Fnv1a64, b: &mut Fnv1a64, v: u8) {
    a.write_u8(v);
    b.write_u8(v);
}

fn write_u64_pair(a: &mut Fnv1a64, b: &mut Fnv1a64, v: u64) {
    a.write_u64(v);
    b.write_u64(v);
}

fn write_f64_pair(a: &mut Fnv1a64, b: &mut Fnv1a64, v: f64) {
    a.write_f64(v);
    b.write_f64(v);
}

#[cfg(test)]
#[path = "../../tests/unit/eval/fingerprint.rs"]
mod tests;
