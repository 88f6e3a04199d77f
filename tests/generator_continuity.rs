// Tests that the emitted sequence is independent of how and when it is pulled

use sinesaw::gen::MixedOscillator;

#[test]
fn test_resume_after_gap_matches_uninterrupted() {
    // Phases are retained while no samples are pulled, so a stop/start
    // gap resumes the waveform exactly where it left off
    let mut continuous = MixedOscillator::new(44100.0);
    let mut paused = MixedOscillator::new(44100.0);

    let first_half: Vec<f32> = (0..1000).map(|_| paused.next_sample()).collect();
    // No pulls happen here; the accumulators just hold their values
    let second_half: Vec<f32> = (0..1000).map(|_| paused.next_sample()).collect();

    for (i, sample) in first_half.iter().chain(second_half.iter()).enumerate() {
        assert_eq!(
            continuous.next_sample().to_bits(),
            sample.to_bits(),
            "Sample {} after the gap should match uninterrupted playback",
            i
        );
    }
}

#[test]
fn test_fill_matches_next_sample() {
    let mut filled = MixedOscillator::new(44100.0);
    let mut ticked = MixedOscillator::new(44100.0);

    let mut buffer = vec![0.0f32; 1024];
    filled.fill(&mut buffer);

    for (i, sample) in buffer.iter().enumerate() {
        assert_eq!(
            ticked.next_sample().to_bits(),
            sample.to_bits(),
            "fill() should emit the same sequence as next_sample() at {}",
            i
        );
    }
}

#[test]
fn test_fill_is_unaffected_by_buffer_splits() {
    // The audio host delivers arbitrary frame counts per callback; the
    // sequence must not depend on where the buffer boundaries fall
    let mut whole = MixedOscillator::new(44100.0);
    let mut split = MixedOscillator::new(44100.0);

    let mut expected = vec![0.0f32; 1024];
    whole.fill(&mut expected);

    let mut actual = Vec::with_capacity(1024);
    for chunk_len in [1usize, 127, 384, 512] {
        let mut chunk = vec![0.0f32; chunk_len];
        split.fill(&mut chunk);
        actual.extend_from_slice(&chunk);
    }

    assert_eq!(actual.len(), expected.len());
    for (i, (a, e)) in actual.iter().zip(expected.iter()).enumerate() {
        assert_eq!(
            a.to_bits(),
            e.to_bits(),
            "Chunked fill should match a single fill at sample {}",
            i
        );
    }
}
