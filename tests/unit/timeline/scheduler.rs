use super::*;

fn timeline(segments: usize, travel: u64) -> Timeline {
    Timeline {
        total_frames: 500,
        start_delay_frames: 30,
        travel_frames: travel,
        fps: Fps::default(),
        num_segments: segments,
    }
}

#[test]
fn pre_delay_has_no_segment() {
    let s = SegmentScheduler::default().schedule(&timeline(1, 120), FrameIndex(0));
    assert_eq!(s.phase, SegmentPhase::PreDelay);
    assert_eq!(s.segment, None);
    assert_eq!(s.progress, 0.0);
}

#[test]
fn single_segment_key_frames() {
    let t = timeline(1, 120);
    let sched = SegmentScheduler::default();
    let s30 = sched.schedule(&t, FrameIndex(30));
    assert_eq!(s30.phase, SegmentPhase::InSegment { index: 0 });
    assert_eq!(s30.progress, 0.0);

    let s90 = sched.schedule(&t, FrameIndex(90));
    assert_eq!(s90.linear_progress, 0.5);
    assert_eq!(s90.progress, 0.5);

    let s150 = sched.schedule(&t, FrameIndex(150));
    assert_eq!(s150.phase, SegmentPhase::Done);
    assert_eq!(s150.segment, Some(0));
    assert_eq!(s150.progress, 1.0);
}

#[test]
fn progress_resets_at_each_boundary() {
    let t = timeline(3, 120);
    let sched = SegmentScheduler::default();
    assert_eq!(sched.schedule(&t, FrameIndex(70)).segment, Some(1));
    assert_eq!(sched.schedule(&t, FrameIndex(70)).progress, 0.0);
    assert_eq!(sched.schedule(&t, FrameIndex(69)).segment, Some(0));
    assert_eq!(sched.schedule(&t, FrameIndex(110)).segment, Some(2));
}

#[test]
fn uneven_split_rounds_down() {
    // 100 frames over 3 segments: boundaries at 33.33 and 66.67.
    let t = timeline(3, 100);
    let sched = SegmentScheduler::default();
    assert_eq!(sched.schedule(&t, FrameIndex(30 + 33)).segment, Some(0));
    assert_eq!(sched.schedule(&t, FrameIndex(30 + 34)).segment, Some(1));
    assert_eq!(sched.schedule(&t, FrameIndex(30 + 66)).segment, Some(1));
    assert_eq!(sched.schedule(&t, FrameIndex(30 + 67)).segment, Some(2));
    assert_eq!(sched.schedule(&t, FrameIndex(30 + 99)).segment, Some(2));
}

#[test]
fn progress_is_monotone_within_segments() {
    let t = timeline(4, 200);
    let sched = SegmentScheduler::default();
    let mut prev = sched.schedule(&t, FrameIndex(0));
    for f in 1..t.total_frames {
        let cur = sched.schedule(&t, FrameIndex(f));
        if cur.segment == prev.segment {
            assert!(cur.progress >= prev.progress, "frame {f}");
        }
        assert!((0.0..=1.0).contains(&cur.progress));
        prev = cur;
    }
}

#[test]
fn clamp_frame_handles_out_of_range() {
    let t = timeline(1, 120);
    assert_eq!(t.clamp_frame(-5), FrameIndex(0));
    assert_eq!(t.clamp_frame(42), FrameIndex(42));
    assert_eq!(t.clamp_frame(10_000), FrameIndex(499));
}

#[test]
fn arrival_frames_follow_segment_duration() {
    let t = timeline(3, 120);
    assert_eq!(t.arrival_frame(0), 30.0);
    assert_eq!(t.arrival_frame(1), 70.0);
    assert_eq!(t.arrival_frame(3), 150.0);
    assert_eq!(t.travel_end(), 150);
}
