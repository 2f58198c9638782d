//! Convert a render plan to a plane scene

use crate::{GlyphRun, PlaneScene, RenderItem};
use layout_engine::{LayoutConfig, Plane, RenderPlan, TextAnchor};
use text_engine::FontRole;

/// Configuration for scene conversion
#[derive(Debug, Clone, PartialEq)]
pub struct SceneConfig {
    /// Font size of guide labels
    pub label_font_size: u32,
    /// Distance of area labels from the area's corner
    pub label_inset: f32,
    /// Distance of grid labels from their line
    pub grid_label_offset: f32,
    /// Distance between grid lines (0 disables the grid)
    pub grid_spacing: u32,
    /// Stroke width of guide rectangles and lines
    pub stroke_width: f32,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            label_font_size: 16,
            label_inset: 5.0,
            grid_label_offset: 2.0,
            grid_spacing: 100,
            stroke_width: 1.0,
        }
    }
}

impl From<&LayoutConfig> for SceneConfig {
    fn from(config: &LayoutConfig) -> Self {
        Self {
            grid_spacing: config.grid_spacing,
            ..Self::default()
        }
    }
}

/// Converts render plans to plane scenes
pub struct SceneConverter {
    config: SceneConfig,
}

impl SceneConverter {
    pub fn new(config: SceneConfig) -> Self {
        Self { config }
    }

    /// Flatten a plan into absolutely positioned items per plane
    pub fn convert(&self, plan: &RenderPlan) -> PlaneScene {
        let geometry = &plan.geometry;
        let mut scene = PlaneScene::new(geometry.width, geometry.height);

        for (origin, run) in plan
            .runs_in(Plane::Normal)
            .chain(plan.runs_in(Plane::Accent))
        {
            scene.push(
                run.plane,
                RenderItem::GlyphRun(GlyphRun {
                    text: run.text.clone(),
                    role: run.plane.font_role(),
                    font_size: run.font_size,
                    x: origin.x + run.x_advance_start,
                    y: origin.y + run.y_offset,
                    anchor: TextAnchor::TopLeft,
                }),
            );
        }

        if let Some(time) = &plan.standalone_time {
            scene.push(
                time.item.plane,
                RenderItem::GlyphRun(GlyphRun {
                    text: time.item.text.clone(),
                    role: time.item.plane.font_role(),
                    font_size: time.item.font_size,
                    x: time.position.x,
                    y: time.position.y,
                    anchor: time.anchor,
                }),
            );
        }

        if let Some(caption) = &plan.caption {
            scene.push(
                Plane::Normal,
                RenderItem::GlyphRun(GlyphRun {
                    text: caption.item.text.clone(),
                    role: FontRole::Caption,
                    font_size: caption.item.font_size,
                    x: caption.position.x,
                    y: caption.position.y,
                    anchor: caption.anchor,
                }),
            );
        }

        if plan.debug_guides {
            self.add_guides(plan, &mut scene);
        }

        scene
    }

    /// Outline the quote and caption areas and overlay a labeled grid
    fn add_guides(&self, plan: &RenderPlan, scene: &mut PlaneScene) {
        let geometry = &plan.geometry;
        let inset = self.config.label_inset;

        let quote_area = geometry.quote_area(plan.footer_height);
        scene.push(Plane::Normal, self.outline(quote_area));
        scene.push(
            Plane::Normal,
            self.label(
                format!(
                    "Quote area: {}x{}px, Font: {}px",
                    quote_area.width, quote_area.height, plan.quote_font_size
                ),
                quote_area.x + inset,
                quote_area.y + inset,
            ),
        );

        if plan.footer_height > 0 {
            let footer_area = geometry.footer_area(plan.footer_height);
            scene.push(Plane::Normal, self.outline(footer_area));
            scene.push(
                Plane::Normal,
                self.label(
                    format!(
                        "Metadata area: {}x{}px",
                        footer_area.width, plan.footer_height
                    ),
                    footer_area.x + inset,
                    footer_area.y + inset,
                ),
            );
        }

        if self.config.grid_spacing == 0 {
            return;
        }
        let spacing = self.config.grid_spacing as usize;
        let offset = self.config.grid_label_offset;
        let (width, height) = (geometry.width as f32, geometry.height as f32);

        for x in (0..geometry.width).step_by(spacing) {
            let x = x as f32;
            scene.push(Plane::Normal, self.line(x, 0.0, x, height));
            if x > 0.0 {
                scene.push(Plane::Normal, self.label(x.to_string(), x + offset, offset));
            }
        }
        for y in (0..geometry.height).step_by(spacing) {
            let y = y as f32;
            scene.push(Plane::Normal, self.line(0.0, y, width, y));
            if y > 0.0 {
                scene.push(Plane::Normal, self.label(y.to_string(), offset, y + offset));
            }
        }
    }

    fn outline(&self, bounds: layout_engine::Rect) -> RenderItem {
        RenderItem::Rectangle {
            bounds,
            stroke_width: self.config.stroke_width,
        }
    }

    fn line(&self, x1: f32, y1: f32, x2: f32, y2: f32) -> RenderItem {
        RenderItem::Line {
            x1,
            y1,
            x2,
            y2,
            width: self.config.stroke_width,
        }
    }

    fn label(&self, text: String, x: f32, y: f32) -> RenderItem {
        RenderItem::GlyphRun(GlyphRun {
            text,
            role: FontRole::Normal,
            font_size: self.config.label_font_size,
            x,
            y,
            anchor: TextAnchor::TopLeft,
        })
    }
}

impl Default for SceneConverter {
    fn default() -> Self {
        Self::new(SceneConfig::default())
    }
}

impl PlaneScene {
    /// Convert a plan with the default scene configuration
    pub fn from_plan(plan: &RenderPlan) -> Self {
        SceneConverter::default().convert(plan)
    }
}
