use osu_format::osu::prelude::*;

#[test]
fn test_prelude_imports() {
    // Command types
    let _point = Point::new(0, 0);
    let _rgb = Rgb::new(255, 0, 0);
    let _sound: HitSound = [HitSoundKind::Whistle, HitSoundKind::Clap].into_iter().collect();
    let _curve = CurveKind::Perfect;
    let _edge_set = EdgeSet::default();
    let _extras = Extras::default();
    let _range = SourceRangeMixin::new(BaseType::Circle, 0, 1);

    // Lexing types
    let mut cursor = Cursor::new("osu file format v14");
    let _line: Option<Line<'_>> = cursor.next_line();
    let _section = SectionKind::HitObjects;
    assert!(VERSION_PREFIX.starts_with("osu"));

    // Model types
    let _osu = Osu::default();
    let _value = Value::parse("1");
    let _section = KeyValueSection::default();
    let _colours = ColourMap::default();
    let _events = EventsSection::default();

    // Parse types
    let _config: ParseConfig = default_config()
        .comments(CommentPolicy::Everywhere)
        .unknown_base_type(BaseTypePolicy::TreatAsCircle);
    let _warning = ParseWarning::StrayLine.into_wrapper_range(0..1);

    // Functions
    assert!(required_samples(&[], &[]).is_empty());
    let _parse: fn(&str) -> Result<OsuOutput, ParseErrorWithRange> = parse_osu;
}
