#![cfg(feature = "serde")]

use osu_format::osu::prelude::*;
use pretty_assertions::assert_eq;
use serde_json::json;

#[test]
fn test_document_shape() {
    let source = "\
osu file format v14

[Metadata]
Title:Song
BeatmapID:42

[TimingPoints]
0,500,4,1,1,100,0,0
2000,500,4,1,1,100,0,0

[HitObjects]
256,192,1000,1,6
64,64,1200,2,0,L|192:64,1,128,2|0
";
    let osu = parse_osu(source).unwrap().osu;
    let value = serde_json::to_value(&osu).unwrap();

    assert_eq!(value["formatVersion"], json!(14));
    assert_eq!(value["general"], json!(null));
    assert_eq!(value["metadata"], json!({ "Title": "Song", "BeatmapID": 42.0 }));
    assert_eq!(value["timingPoints"][0]["sampleSet"], json!("normal"));
    assert_eq!(value["timingPoints"][0]["millisecondsPerBeat"], json!(500.0));

    assert_eq!(
        value["hitObjects"][0],
        json!({
            "position": { "x": 256, "y": 192 },
            "time": 1000,
            "newCombo": false,
            "comboSkip": 0,
            "maniaColumn": false,
            "hitSound": ["whistle", "finish"],
            "extras": null,
            "kind": { "type": "circle" },
        })
    );
    assert_eq!(
        value["hitObjects"][1]["kind"],
        json!({
            "type": "slider",
            "path": { "kind": "linear", "end": { "x": 192, "y": 64 } },
            "repeatCount": 1,
            "pixelLength": 128.0,
            "edgeHitSounds": [["whistle"], []],
            "edgeSets": [],
        })
    );
    assert_eq!(
        value["requiredSamples"],
        json!(["normal-hitwhistle.wav", "normal-hitfinish.wav", "normal-hitnormal.wav"])
    );
}

#[test]
fn test_document_from_json() {
    let source = include_str!("files/old_format.osu");
    let osu = parse_osu(source).unwrap().osu;
    let text = serde_json::to_string(&osu).unwrap();
    let restored: Osu = serde_json::from_str(&text).unwrap();
    assert_eq!(restored.hit_objects, osu.hit_objects);
    assert_eq!(restored.required_samples, osu.required_samples);
}

#[test]
fn test_error_serializes() {
    let err = parse_osu("osu file format v14\n[Nope]\n").unwrap_err();
    let value = serde_json::to_value(&err).unwrap();
    assert_eq!(value["content"], json!({ "UnrecognizedSection": "Nope" }));
    assert_eq!(value["start"], json!(20));
    assert_eq!(value["end"], json!(26));
}
