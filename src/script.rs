//! Gesture scripts: a scene, a viewport and a sequence of pointer steps,
//! replayed against a fresh interaction.

use std::cell::RefCell;
use std::path::Path;
use std::rc::Rc;

use anyhow::Context;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use shapekit_core::{Geometry, ShapeId, TransformOptions, Viewport};
use shapekit_transform::{
    EventFilter, Handle, PointerButton, PointerEvent, PointerKind, Scene, TransformEvent,
    TransformInteraction, DEFAULT_MAX_ENTRIES,
};

fn default_zoom() -> f64 {
    1.0
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScriptViewport {
    pub width: f64,
    pub height: f64,
    #[serde(default = "default_zoom")]
    pub zoom: f64,
    #[serde(default)]
    pub pan_x: f64,
    #[serde(default)]
    pub pan_y: f64,
}

impl Default for ScriptViewport {
    fn default() -> Self {
        Self {
            width: 1200.0,
            height: 800.0,
            zoom: default_zoom(),
            pan_x: 0.0,
            pan_y: 0.0,
        }
    }
}

impl ScriptViewport {
    fn to_viewport(&self) -> Viewport {
        let mut viewport = Viewport::new(self.width, self.height);
        viewport.set_zoom(self.zoom);
        viewport.set_pan(self.pan_x, self.pan_y);
        viewport
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScriptShape {
    pub geometry: Geometry,
}

/// One scripted input. Pointer positions are in screen pixels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "step", rename_all = "snake_case")]
pub enum Step {
    Pointer {
        kind: PointerKind,
        x: f64,
        y: f64,
        #[serde(default)]
        button: PointerButton,
    },
    Undo,
    Redo,
    /// Selects the shape at `index` in the script's shape list
    Select { index: usize },
    ClearSelection,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GestureScript {
    #[serde(default)]
    pub viewport: ScriptViewport,
    pub shapes: Vec<ScriptShape>,
    #[serde(default)]
    pub steps: Vec<Step>,
}

impl GestureScript {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read script {}", path.display()))?;
        Self::from_json(&content).with_context(|| format!("Invalid script {}", path.display()))
    }

    pub fn from_json(content: &str) -> anyhow::Result<Self> {
        Ok(serde_json::from_str(content)?)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShapeOutput {
    pub id: ShapeId,
    pub geometry: Geometry,
}

/// State after the last step
#[derive(Debug, Clone, Serialize)]
pub struct ReplayOutcome {
    pub shapes: Vec<ShapeOutput>,
    pub selected: Option<ShapeId>,
    #[serde(skip)]
    pub handles: Vec<Handle>,
    #[serde(skip)]
    pub events: Vec<TransformEvent>,
}

/// Runs `script` against a fresh scene.
///
/// A `deletefeature` removes the shape from the scene before the next step.
pub fn replay(
    script: &GestureScript,
    options: TransformOptions,
    history_capacity: usize,
) -> ReplayOutcome {
    let mut scene = Scene::new(script.viewport.to_viewport());
    let ids: Vec<ShapeId> = script
        .shapes
        .iter()
        .map(|shape| scene.add(shape.geometry.clone()))
        .collect();

    let mut interaction = TransformInteraction::with_history_capacity(options, history_capacity);
    let log = Rc::new(RefCell::new(Vec::new()));
    let sink = log.clone();
    interaction.subscribe(EventFilter::All, move |event: &TransformEvent| {
        info!("{}", event);
        sink.borrow_mut().push(event.clone());
    });
    interaction.set_shapes(&mut scene, ids.iter().copied());
    interaction.start();

    let mut seen = 0;
    for (n, step) in script.steps.iter().enumerate() {
        debug!("Step {}: {:?}", n, step);
        match step {
            Step::Pointer { kind, x, y, button } => {
                let event = PointerEvent::new(*kind, *x, *y).with_button(*button);
                interaction.dispatch(&mut scene, event);
            }
            Step::Undo => {
                if !interaction.undo(&mut scene) {
                    debug!("Step {}: nothing to undo", n);
                }
            }
            Step::Redo => {
                if !interaction.redo(&mut scene) {
                    debug!("Step {}: nothing to redo", n);
                }
            }
            Step::Select { index } => match ids.get(*index) {
                Some(id) => {
                    interaction.select_shape(&scene, *id);
                }
                None => warn!("Step {}: no shape at index {}", n, index),
            },
            Step::ClearSelection => interaction.clear_selection(&mut scene),
        }

        let events = log.borrow();
        for event in &events[seen..] {
            if let TransformEvent::DeleteFeature { shape } = event {
                scene.store.remove(*shape);
            }
        }
        seen = events.len();
    }

    let shapes = scene
        .store
        .iter()
        .map(|(id, geometry)| ShapeOutput {
            id,
            geometry: geometry.clone(),
        })
        .collect();
    let events = log.borrow().clone();

    ReplayOutcome {
        shapes,
        selected: interaction.selected_shape(),
        handles: interaction.handles().to_vec(),
        events,
    }
}

/// Replays with default options and history depth.
pub fn replay_default(script: &GestureScript) -> ReplayOutcome {
    replay(script, TransformOptions::default(), DEFAULT_MAX_ENTRIES)
}
