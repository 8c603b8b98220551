//! Interactive chart composition.
//!
//! The composer emits a Vega-Lite layer specification as plain JSON; the
//! rendering and interaction engine is the charting library on the client.
//! Hover state (NoSelection / a single selected day) lives inside the
//! rendered chart: the `hover` point selection picks the nearest timestamp
//! under the pointer and clears when the pointer leaves the chart, so
//! nothing about it is persisted across re-renders.

use serde_json::{json, Value};

use crate::transform::LongFormRow;

/// Compose the layered comparison chart over long-form rows.
///
/// Layers, bottom to top: one color-encoded line per series, a transparent
/// point layer driving nearest-point hover selection keyed on the timestamp,
/// a point-and-text overlay visible only for the selected timestamp, and a
/// vertical rule at that timestamp. The y scale does not force a zero
/// baseline; ppm concentrations have no meaningful on-screen zero. Empty
/// input composes an empty (but valid) chart.
pub fn compose_interactive_chart(rows: &[LongFormRow], title: &str) -> Value {
    json!({
        "$schema": "https://vega.github.io/schema/vega-lite/v5.json",
        "title": title,
        "width": "container",
        "height": 380,
        "data": {"values": rows},
        "encoding": {
            "x": {"field": "timestamp", "type": "temporal", "title": "date"}
        },
        "layer": [
            {
                "encoding": {
                    "color": {"field": "series", "type": "nominal", "title": "series"},
                    "y": {
                        "field": "value",
                        "type": "quantitative",
                        "title": "XCO2 [ppm]",
                        "scale": {"zero": false}
                    }
                },
                "layer": [
                    {"mark": "line"},
                    {
                        "params": [{
                            "name": "hover",
                            "select": {
                                "type": "point",
                                "fields": ["timestamp"],
                                "nearest": true,
                                "on": "pointermove",
                                "clear": "pointerout"
                            }
                        }],
                        "mark": {"type": "point", "opacity": 0}
                    },
                    {
                        "transform": [{"filter": {"param": "hover", "empty": false}}],
                        "mark": "point"
                    },
                    {
                        "mark": {"type": "text", "align": "left", "dx": 6, "dy": -6},
                        "encoding": {
                            "text": {
                                "condition": {
                                    "param": "hover",
                                    "empty": false,
                                    "field": "value",
                                    "type": "quantitative",
                                    "format": ".2f"
                                },
                                "value": ""
                            }
                        }
                    }
                ]
            },
            {
                "transform": [{"filter": {"param": "hover", "empty": false}}],
                "mark": {"type": "rule", "color": "gray"}
            }
        ]
    })
}
