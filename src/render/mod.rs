//! 3Dmol.js script and page emission.
//!
//! A composed [`Viewer`] is turned into the JavaScript a browser needs to
//! reproduce the scene: one statement per recorded command against a
//! `$3Dmol.createViewer` instance, closed by a final `render()` call. All
//! arguments are JSON-encoded with `serde_json`, so model content with quotes
//! or newlines survives embedding unchanged.

use crate::viewer::command::Command;
use crate::viewer::view::Viewer;
use serde::Serialize;

/// Hosted 3Dmol.js distribution referenced by emitted pages.
pub const VIEWER_LIBRARY_URL: &str = "https://3Dmol.org/build/3Dmol-min.js";

/// Element id used by [`to_html`] for the viewport container.
const VIEWPORT_ID: &str = "viewport";

/// Emits the JavaScript that replays the viewer's command log.
///
/// # Arguments
///
/// * `viewer` - Composed viewer to replay.
/// * `element_id` - DOM id of the container element the scene renders into.
///
/// # Returns
///
/// The script text, one statement per line, ending with `viewer.render();`.
pub fn to_javascript(viewer: &Viewer, element_id: &str) -> Result<String, serde_json::Error> {
    let mut script = String::new();

    script.push_str(&format!(
        "const viewer = $3Dmol.createViewer(document.getElementById({}));\n",
        json(&element_id)?
    ));

    for command in viewer.commands() {
        let statement = match command {
            Command::AddModel { content, format } => format!(
                "viewer.addModel({}, {});\n",
                json(content)?,
                json(&format.as_str())?
            ),
            Command::AddModelsAsFrames { content, format } => format!(
                "viewer.addModelsAsFrames({}, {});\n",
                json(content)?,
                json(&format.as_str())?
            ),
            Command::SetStyle { selection, style } => format!(
                "viewer.setStyle({}, {});\n",
                json(selection)?,
                json(style)?
            ),
            Command::AddStyle { selection, style } => format!(
                "viewer.addStyle({}, {});\n",
                json(selection)?,
                json(style)?
            ),
            Command::ZoomTo { selection } => {
                format!("viewer.zoomTo({});\n", json(selection)?)
            }
            Command::Rotate { degrees } => {
                // The viewer's default rotation axis is y.
                format!("viewer.rotate({});\n", degrees)
            }
            Command::Animate { interval_ms } => {
                format!("viewer.animate({{\"interval\":{}}});\n", interval_ms)
            }
        };
        script.push_str(&statement);
    }

    script.push_str("viewer.render();\n");
    Ok(script)
}

/// Emits a standalone HTML page embedding the scene script and the 3Dmol.js
/// distribution reference.
pub fn to_html(viewer: &Viewer, title: &str) -> Result<String, serde_json::Error> {
    let script = to_javascript(viewer, VIEWPORT_ID)?;

    Ok(format!(
        "<!DOCTYPE html>\n\
         <html>\n\
         <head>\n\
         <meta charset=\"utf-8\">\n\
         <title>{title}</title>\n\
         <script src=\"{url}\"></script>\n\
         <style>#{id} {{ width: 800px; height: 600px; position: relative; }}</style>\n\
         </head>\n\
         <body>\n\
         <div id=\"{id}\"></div>\n\
         <script>\n\
         {script}\
         </script>\n\
         </body>\n\
         </html>\n",
        title = title,
        url = VIEWER_LIBRARY_URL,
        id = VIEWPORT_ID,
        script = script,
    ))
}

fn json<T: Serialize>(value: &T) -> Result<String, serde_json::Error> {
    serde_json::to_string(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::viewer::color::Color;
    use crate::viewer::command::ModelFormat;
    use crate::viewer::selection::Selection;
    use crate::viewer::style::{CartoonStyle, StickStyle, StyleSpec};

    fn sample_viewer() -> Viewer {
        let mut viewer = Viewer::new();
        viewer.add_model("ATOM      1  CA  ALA A   1\nEND\n", ModelFormat::Pdb);
        viewer.set_style(
            Selection::all(),
            StyleSpec::new()
                .with_cartoon(CartoonStyle::default())
                .with_stick(StickStyle::new().with_radius(0.1)),
        );
        viewer.add_models_as_frames("pose\n$$$$\n", ModelFormat::Sdf);
        viewer.set_style(
            Selection::model(1),
            StyleSpec::new().with_stick(StickStyle::new().with_carbon_scheme(&Color::green())),
        );
        viewer.animate(1000);
        viewer.zoom_to(Selection::model(0));
        viewer.rotate(270.0);
        viewer
    }

    #[test]
    fn script_opens_with_viewer_creation_and_ends_with_render() {
        let script = to_javascript(&sample_viewer(), "stage").unwrap();
        let lines: Vec<&str> = script.lines().collect();
        assert_eq!(
            lines.first().copied(),
            Some("const viewer = $3Dmol.createViewer(document.getElementById(\"stage\"));")
        );
        assert_eq!(lines.last().copied(), Some("viewer.render();"));
    }

    #[test]
    fn script_contains_one_statement_per_command() {
        let viewer = sample_viewer();
        let script = to_javascript(&viewer, "stage").unwrap();
        // Creation line + commands + render line.
        assert_eq!(script.lines().count(), viewer.commands().len() + 2);
    }

    #[test]
    fn model_content_is_json_escaped() {
        let script = to_javascript(&sample_viewer(), "stage").unwrap();
        assert!(
            script.contains("viewer.addModel(\"ATOM      1  CA  ALA A   1\\nEND\\n\", \"pdb\");")
        );
        assert!(script.contains("viewer.addModelsAsFrames(\"pose\\n$$$$\\n\", \"sdf\");"));
    }

    #[test]
    fn style_statements_carry_serialized_objects() {
        let script = to_javascript(&sample_viewer(), "stage").unwrap();
        assert!(
            script.contains("viewer.setStyle({}, {\"cartoon\":{},\"stick\":{\"radius\":0.1}});")
        );
        assert!(script.contains(
            "viewer.setStyle({\"model\":1}, {\"stick\":{\"colorscheme\":\"greenCarbon\"}});"
        ));
    }

    #[test]
    fn camera_and_animation_statements_match_viewer_api() {
        let script = to_javascript(&sample_viewer(), "stage").unwrap();
        assert!(script.contains("viewer.zoomTo({\"model\":0});"));
        assert!(script.contains("viewer.rotate(270);"));
        assert!(script.contains("viewer.animate({\"interval\":1000});"));
    }

    #[test]
    fn html_page_embeds_library_and_script() {
        let page = to_html(&sample_viewer(), "Docked poses").unwrap();
        assert!(page.starts_with("<!DOCTYPE html>"));
        assert!(page.contains("<title>Docked poses</title>"));
        assert!(page.contains(VIEWER_LIBRARY_URL));
        assert!(page.contains("<div id=\"viewport\"></div>"));
        assert!(page.contains("viewer.render();"));
    }

    #[test]
    fn empty_viewer_still_renders() {
        let script = to_javascript(&Viewer::new(), "stage").unwrap();
        assert_eq!(script.lines().count(), 2);
    }
}
