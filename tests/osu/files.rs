use osu_format::osu::prelude::*;
use pretty_assertions::assert_eq;

use super::{parse_without_warnings, range_of};

#[test]
fn test_sample_song() {
    let source = include_str!("files/sample_song.osu");
    let OsuOutput { osu, warnings } = parse_osu(source).unwrap();

    // Only the bezier slider is reported.
    let bezier_line = "64,320,5500,6,4,B|128:320|192:256,2,210";
    assert_eq!(
        warnings,
        vec![
            ParseWarning::UnevaluatedCurve(CurveKind::Bezier)
                .into_wrapper_range(range_of(source, bezier_line))
        ]
    );

    assert_eq!(osu.format_version, 14);

    let general = osu.general.as_ref().unwrap();
    assert_eq!(general.text("AudioFilename"), Some("audio.mp3"));
    assert_eq!(general.number("PreviewTime"), Some(42000.0));
    assert_eq!(general.number("StackLeniency"), Some(0.7));
    assert_eq!(general.text("SampleSet"), Some("Soft"));
    assert_eq!(general.len(), 9);

    let editor = osu.editor.as_ref().unwrap();
    assert_eq!(editor.text("Bookmarks"), Some("1500,9500"));
    assert_eq!(editor.number("BeatDivisor"), Some(4.0));

    let metadata = osu.metadata.as_ref().unwrap();
    assert_eq!(metadata.text("Title"), Some("Sample Song"));
    assert_eq!(metadata.text("Artist"), Some("Example Artist"));
    assert_eq!(metadata.text("Source"), Some(""));
    assert_eq!(metadata.text("Tags"), Some("test demo osu"));
    assert_eq!(metadata.number("BeatmapSetID"), Some(-1.0));

    let difficulty = osu.difficulty.as_ref().unwrap();
    assert_eq!(difficulty.number("SliderMultiplier"), Some(1.4));
    assert_eq!(difficulty.number("ApproachRate"), Some(7.0));

    // Comments inside a section are content under the default policy.
    let events = osu.events.as_ref().unwrap();
    assert_eq!(
        events.lines,
        vec![
            "//Background and Video events",
            "0,0,\"bg.jpg\",0,0",
            "//Break Periods",
            "2,6000,7500",
            "//Storyboard Layer 0 (Background)",
        ]
    );

    let colours = osu.colours.as_ref().unwrap();
    assert_eq!(
        colours.combo_colours(),
        vec![Rgb::new(255, 128, 0), Rgb::new(0, 202, 0)]
    );
    assert_eq!(colours.get("SliderBorder"), Some(Rgb::new(255, 255, 255)));

    eprintln!("{osu:?}");
}

#[test]
fn test_sample_song_timing() {
    let source = include_str!("files/sample_song.osu");
    let osu = parse_osu(source).unwrap().osu;
    let points = osu.timing_points.as_deref().unwrap();

    assert_eq!(
        points
            .iter()
            .map(|point| (point.offset, point.milliseconds_per_beat))
            .collect::<Vec<_>>(),
        vec![(1000, 500.0), (3000, 250.0), (5000, 375.0), (8000, 750.0)]
    );
    assert_eq!(points[0].bpm(), 120.0);
    assert_eq!(points[1].raw_beat_length, -50.0);
    assert!(points[1].is_relative());
    assert!(points[1].inherited);
    assert!(points[1].kiai);
    assert_eq!(points[1].sample_index, 2);
    assert_eq!(points[2].sample_set, SampleSet::Normal);
    assert_eq!(points[2].meter, 3);
    assert_eq!(points[3].sample_set, SampleSet::Drum);

    assert_eq!(osu.timing_point_at(999), None);
    assert_eq!(osu.timing_point_at(4000).map(|p| p.offset), Some(3000));
    assert_eq!(osu.timing_point_at(5000).map(|p| p.offset), Some(5000));
}

#[test]
fn test_sample_song_hit_objects() {
    let source = include_str!("files/sample_song.osu");
    let osu = parse_osu(source).unwrap().osu;
    let objects = osu.hit_objects.as_deref().unwrap();
    assert_eq!(objects.len(), 8);

    assert_eq!(
        objects.iter().map(HitObject::base_type).collect::<Vec<_>>(),
        vec![
            BaseType::Circle,
            BaseType::Slider,
            BaseType::Circle,
            BaseType::Spinner,
            BaseType::Slider,
            BaseType::Circle,
            BaseType::Circle,
            BaseType::Circle,
        ]
    );
    assert_eq!(
        objects.iter().map(|o| o.new_combo).collect::<Vec<_>>(),
        vec![true, false, false, true, true, false, false, false]
    );

    let HitObjectKind::Slider(perfect) = &objects[1].kind else {
        panic!("expected a slider, got {:?}", objects[1].kind);
    };
    assert_eq!(
        perfect.path,
        CurvePath::Perfect {
            passthrough: Point::new(150, 50),
            end: Point::new(200, 100),
        }
    );
    assert_eq!(perfect.edge_hit_sounds.len(), 2);
    assert_eq!(objects[1].edge_hit_sound(1), Some(HitSound::from_bits(8)));
    assert_eq!(perfect.edge_sets.len(), 2);
    assert!(objects[1].extras.is_some());

    assert_eq!(objects[3].kind, HitObjectKind::Spinner { end_time: 4500 });

    let HitObjectKind::Slider(bezier) = &objects[4].kind else {
        panic!("expected a slider, got {:?}", objects[4].kind);
    };
    assert_eq!(bezier.path.kind(), CurveKind::Bezier);
    assert_eq!(bezier.path.end(), Some(Point::new(192, 256)));
    assert_eq!(bezier.repeat_count, 2);
    assert!(bezier.edge_hit_sounds.is_empty());
    assert_eq!(
        (0..4).map(|edge| objects[4].edge_hit_sound(edge)).collect::<Vec<_>>(),
        vec![Some(HitSound::from_bits(4)); 3]
            .into_iter()
            .chain([None])
            .collect::<Vec<_>>()
    );
    assert_eq!(objects[4].extras, None);

    assert_eq!(
        objects[5].extras,
        Some(Extras {
            sample_set: SampleSet::Soft,
            volume: 90,
            ..Extras::default()
        })
    );
}

#[test]
fn test_sample_song_required_samples() {
    let source = include_str!("files/sample_song.osu");
    let osu = parse_osu(source).unwrap().osu;
    assert_eq!(
        osu.required_samples.unwrap(),
        vec![
            "soft-hitnormal.wav",
            "soft-hitwhistle.wav",
            "soft-hitclap2.wav",
            "soft-hitnormal2.wav",
            "normal-hitfinish.wav",
            "normal-hitwhistle.wav",
            "normal-hitclap.wav",
        ]
    );
}

#[test]
fn test_sample_song_comments_everywhere() {
    let source = include_str!("files/sample_song.osu");
    let config = default_config().comments(CommentPolicy::Everywhere);
    let osu = parse_osu_with_config(source, config).unwrap().osu;
    assert_eq!(
        osu.events.unwrap().lines,
        vec!["0,0,\"bg.jpg\",0,0", "2,6000,7500"]
    );
}

#[test]
fn test_old_format() {
    let source = include_str!("files/old_format.osu");
    let osu = parse_without_warnings(source);

    assert_eq!(osu.format_version, 9);
    assert_eq!(osu.editor, None);
    assert_eq!(osu.events, None);
    assert_eq!(osu.colours, None);

    let objects = osu.hit_objects.as_deref().unwrap();
    let HitObjectKind::Slider(slider) = &objects[2].kind else {
        panic!("expected a slider, got {:?}", objects[2].kind);
    };
    assert_eq!(slider.path, CurvePath::Linear { end: Point::new(192, 64) });
    assert_eq!(slider.edge_count(), 2);
    assert_eq!(objects[2].edge_hit_sound(1), Some(HitSound::NONE));
    assert_eq!(objects[3].kind, HitObjectKind::Spinner { end_time: 4000 });
    assert_eq!(objects[3].extras, None);

    assert_eq!(
        osu.required_samples.unwrap(),
        vec!["normal-hitnormal0.wav", "normal-hitwhistle0.wav"]
    );
}

#[test]
fn test_crlf_and_bom() {
    let source = include_str!("files/sample_song.osu");
    let windows = format!("\u{feff}{}", source.replace('\n', "\r\n"));
    let expected = parse_osu(source).unwrap();
    let actual = parse_osu(&windows).unwrap();
    assert_eq!(actual.osu, expected.osu);
    assert_eq!(actual.warnings.len(), expected.warnings.len());
}

#[test]
fn test_reparse_is_idempotent() {
    let source = include_str!("files/sample_song.osu");
    let first = parse_osu(source).unwrap();
    let second = parse_osu(source).unwrap();
    assert_eq!(first, second);
}
