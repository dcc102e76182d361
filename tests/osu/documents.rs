use osu_format::osu::prelude::*;
use pretty_assertions::assert_eq;

use super::{parse_without_warnings, range_of};

#[test]
fn test_empty_input() {
    for source in ["", "\n\n", "  \r\n\t\n"] {
        let err = parse_osu(source).unwrap_err();
        assert_eq!(err.content(), &ParseError::EmptyInput);
    }
}

#[test]
fn test_missing_version_header() {
    let source = "\n[General]\nMode: 0\n";
    let err = parse_osu(source).unwrap_err();
    assert_eq!(
        err.into_content(),
        ParseError::MissingVersionHeader {
            found: "[General]".into()
        }
    );
}

#[test]
fn test_version_only() {
    let osu = parse_without_warnings("osu file format v14");
    assert_eq!(
        osu,
        Osu {
            format_version: 14,
            ..Osu::default()
        }
    );
}

#[test]
fn test_sections_absent_stay_none() {
    let osu = parse_without_warnings("osu file format v14\n\n[HitObjects]\n256,192,500,1,0\n");
    assert_eq!(osu.general, None);
    assert_eq!(osu.timing_points, None);
    assert_eq!(osu.hit_objects.as_ref().map(Vec::len), Some(1));
    // Samples are derived only when timing points exist too.
    assert_eq!(osu.required_samples, None);
}

#[test]
fn test_empty_sections() {
    let source = "osu file format v14\n\n[TimingPoints]\n\n[HitObjects]\n";
    let osu = parse_without_warnings(source);
    assert_eq!(osu.timing_points, Some(vec![]));
    assert_eq!(osu.hit_objects, Some(vec![]));
    assert_eq!(osu.required_samples, Some(vec![]));
}

#[test]
fn test_section_at_end_without_blank_line() {
    let osu = parse_without_warnings("osu file format v14\n[Metadata]\nTitle:Last");
    assert_eq!(osu.metadata.unwrap().text("Title"), Some("Last"));
}

#[test]
fn test_unrecognized_section() {
    let source = "osu file format v14\n\n[Storyboard]\nfoo\n";
    let err = parse_osu(source).unwrap_err();
    assert_eq!(
        err.content(),
        &ParseError::UnrecognizedSection("Storyboard".into())
    );
    assert_eq!(err.range(), range_of(source, "[Storyboard]"));
}

#[test]
fn test_header_name_up_to_last_bracket() {
    let source = "osu file format v14\n[Metadata] ]\nTitle:X\n";
    let err = parse_osu(source).unwrap_err();
    assert_eq!(
        err.into_content(),
        ParseError::UnrecognizedSection("Metadata] ".into())
    );
}

#[test]
fn test_top_level_comments_and_stray_lines() {
    let source = "osu file format v14\n// a comment\nstray\n\n[General]\nMode: 0\n";
    let OsuOutput { osu, warnings } = parse_osu(source).unwrap();
    assert_eq!(
        warnings,
        vec![ParseWarning::StrayLine.into_wrapper_range(range_of(source, "stray"))]
    );
    assert_eq!(osu.general.unwrap().number("Mode"), Some(0.0));
}

#[test]
fn test_comment_inside_section() {
    let source = "osu file format v14\n\n[General]\n// note\nMode: 0\n";

    // A comment line is content by default, and has no colon.
    let err = parse_osu(source).unwrap_err();
    assert_eq!(
        err.content(),
        &ParseError::MalformedKeyValueLine("// note".into())
    );
    assert_eq!(err.range(), range_of(source, "// note"));

    let config = default_config().comments(CommentPolicy::Everywhere);
    let output = parse_osu_with_config(source, config).unwrap();
    assert_eq!(output.osu.general.unwrap().len(), 1);
}

#[test]
fn test_duplicate_section_last_wins() {
    let source = "osu file format v14\n\n[Metadata]\nTitle:First\n\n[Metadata]\nTitle:Second\n";
    let OsuOutput { osu, warnings } = parse_osu(source).unwrap();
    let second = source.rfind("[Metadata]").unwrap();
    assert_eq!(
        warnings,
        vec![
            ParseWarning::DuplicateSection(SectionKind::Metadata)
                .into_wrapper_range(second..second + "[Metadata]".len())
        ]
    );
    assert_eq!(osu.metadata.unwrap().text("Title"), Some("Second"));
}

#[test]
fn test_first_error_stops_the_parse() {
    let source = "osu file format v14\n\n[TimingPoints]\n0,500,4\n\n[Colours]\nCombo1 : 1,2\n";
    let err = parse_osu(source).unwrap_err();
    assert_eq!(
        err.content(),
        &ParseError::MalformedTimingPointLine { fields: 3 }
    );
    assert_eq!(err.range(), range_of(source, "0,500,4"));
}

#[test]
fn test_inherited_before_uninherited() {
    let source = "osu file format v14\n\n[TimingPoints]\n0,-100,4,1,0,100,1,0\n";
    assert_eq!(
        parse_osu(source).unwrap_err().into_content(),
        ParseError::InheritedBeforeUninherited { offset: 0 }
    );
}

#[test]
fn test_inherited_tempo() {
    let source = "osu file format v14\n\n[TimingPoints]\n1000,500,4,2,1,80,0,0\n2000,-50,4,0,0,50,1,0\n";
    let points = parse_without_warnings(source).timing_points.unwrap();
    assert_eq!(
        points[0],
        TimingPoint {
            offset: 1000,
            milliseconds_per_beat: 500.0,
            raw_beat_length: 500.0,
            meter: 4,
            sample_set: SampleSet::Soft,
            sample_index: 1,
            volume: 80,
            inherited: false,
            kiai: false,
        }
    );
    assert_eq!(points[1].milliseconds_per_beat, 250.0);
    assert_eq!(points[1].sample_set, SampleSet::Auto);
}

#[test]
fn test_hit_object_errors_carry_the_line() {
    let source = "osu file format v14\n\n[HitObjects]\n0,0,0,1,0\n0,0,100,2,0,X|1:1,0,10\n0,0,200,2,0,L|1:1|2:2,0,10\n";
    let err = parse_osu(source).unwrap_err();
    assert_eq!(
        err.content(),
        &ParseError::MalformedSliderPath {
            curve: CurveKind::Linear,
            points: 2
        }
    );
    assert_eq!(err.range(), range_of(source, "0,0,200,2,0,L|1:1|2:2,0,10"));
}

#[test]
fn test_unknown_curve_warns() {
    let source = "osu file format v14\n\n[HitObjects]\n0,0,100,2,0,X|1:1,0,10\n";
    let OsuOutput { osu, warnings } = parse_osu(source).unwrap();
    assert_eq!(
        warnings,
        vec![
            ParseWarning::UnknownCurveType("X".into())
                .into_wrapper_range(range_of(source, "0,0,100,2,0,X|1:1,0,10"))
        ]
    );
    let objects = osu.hit_objects.unwrap();
    let HitObjectKind::Slider(slider) = &objects[0].kind else {
        panic!("expected a slider, got {:?}", objects[0].kind);
    };
    assert_eq!(slider.path, CurvePath::Linear { end: Point::new(1, 1) });
}

#[test]
fn test_base_type_policy() {
    let source = "osu file format v14\n\n[HitObjects]\n64,192,500,128,0\n";
    assert_eq!(
        parse_osu(source).unwrap_err().into_content(),
        ParseError::MalformedHitObjectType(128)
    );

    let config = default_config().unknown_base_type(BaseTypePolicy::TreatAsCircle);
    let osu = parse_osu_with_config(source, config).unwrap().osu;
    assert_eq!(osu.hit_objects.unwrap()[0].kind, HitObjectKind::Circle);
}

#[test]
fn test_objects_on_timing_offsets_need_no_samples() {
    let source = "\
osu file format v14

[TimingPoints]
0,500,4,1,1,100,0,0
1000,500,4,2,1,100,0,0

[HitObjects]
0,0,0,1,2
0,0,1000,1,2
0,0,1500,1,2
";
    let osu = parse_without_warnings(source);
    assert_eq!(osu.required_samples, Some(vec![]));
}
