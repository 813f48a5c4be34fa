//! CLI for facial uniqueness analysis.
//!
//! Reads detector output (bounding boxes plus 68-point landmark arrays) from
//! a JSON file and prints the metric/uniqueness report for each face.
//!
//! Usage:
//!   face-uniqueness <detections.json>            # Human-readable output
//!   face-uniqueness <detections.json> --json     # JSON output
//!   face-uniqueness <detections.json> -o out.json

use clap::Parser;
use face_uniqueness::{
    report, BaselineTable, DetectionBox, FaceMetrics, LandmarkSet, MetricRow, Point,
    UniquenessScores,
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "face-uniqueness")]
#[command(author, version, about = "Facial proportion metrics and uniqueness scores", long_about = None)]
struct Args {
    /// Detector output file: a JSON array of {"box": {...}, "points": [...]}
    /// records, one per detected face, with 68 landmark points each
    #[arg(required = true)]
    input: PathBuf,

    /// Output as JSON
    #[arg(short, long)]
    json: bool,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Show verbose output
    #[arg(short, long)]
    verbose: bool,
}

/// One face as produced by the external detector.
#[derive(Deserialize)]
struct DetectionRecord {
    #[serde(rename = "box")]
    face_box: DetectionBox,
    points: Vec<Point>,
}

/// Output structure for JSON serialization
#[derive(Serialize)]
struct Output {
    input: String,
    faces: Vec<FaceOutput>,
}

#[derive(Serialize)]
struct FaceOutput {
    /// Face index (1-based)
    index: usize,
    bounding_box: DetectionBox,
    metrics: FaceMetrics,
    scores: UniquenessScores,
    rows: Vec<MetricRow>,
    radar: RadarOutput,
}

#[derive(Serialize)]
struct RadarOutput {
    labels: Vec<&'static str>,
    values: Vec<u8>,
}

fn main() {
    let args = Args::parse();

    if let Err(e) = run(&args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    if args.verbose {
        eprintln!("Reading detections from {:?}...", args.input);
    }
    let data = std::fs::read_to_string(&args.input)?;
    let detections: Vec<DetectionRecord> = serde_json::from_str(&data)?;

    if args.verbose {
        eprintln!("Found {} face(s)", detections.len());
    }

    let baselines = BaselineTable::default();
    let mut faces = Vec::new();

    for (i, detection) in detections.iter().enumerate() {
        let landmarks = LandmarkSet::from_ibug_68(&detection.points)?;
        let metrics = FaceMetrics::measure(&landmarks, &detection.face_box);
        let scores = UniquenessScores::compute(&metrics, &baselines);
        let (labels, values) = report::radar(&metrics, &baselines);

        faces.push(FaceOutput {
            index: i + 1,
            bounding_box: detection.face_box,
            metrics,
            scores,
            rows: report::rows(&metrics, &baselines),
            radar: RadarOutput { labels, values },
        });
    }

    let output = Output {
        input: args.input.display().to_string(),
        faces,
    };

    let output_str = if args.json {
        serde_json::to_string_pretty(&output)?
    } else {
        format_human_readable(&output)
    };

    if let Some(ref path) = args.output {
        std::fs::write(path, &output_str)?;
        if args.verbose {
            eprintln!("Output written to {:?}", path);
        }
    } else {
        println!("{}", output_str);
    }

    Ok(())
}

fn format_human_readable(output: &Output) -> String {
    let mut s = String::new();

    s.push_str(&format!("Input: {}\n", output.input));
    s.push_str(&format!("Faces: {}\n", output.faces.len()));

    if output.faces.is_empty() {
        s.push_str("\nNo faces in input.\n");
        return s;
    }

    for face in &output.faces {
        s.push_str(&format!("\n--- Face {} ---\n", face.index));
        s.push_str(&format!(
            "Bounding box: {}x{} at ({}, {})\n",
            face.bounding_box.width, face.bounding_box.height, face.bounding_box.x,
            face.bounding_box.y
        ));

        s.push_str("\nMetrics:\n");
        for row in &face.rows {
            let marker = if row.is_high_uniqueness { " *" } else { "" };
            s.push_str(&format!(
                "  {:<14} {:>8}   {:>5.1}% unique{}\n",
                row.label, row.value, row.uniqueness_percent, marker
            ));
        }
        s.push_str("\n  (* = unusually far from the population baseline)\n");
    }

    s
}
