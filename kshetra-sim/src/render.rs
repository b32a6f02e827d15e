//! SVG report rendering.
//!
//! Renders the final arena and the recorded movement trail to SVG.
//! The report shows:
//! - The arena tiles (walls, obstacles, remaining markers)
//! - The movement trail, colored by crossing ordinal
//! - Pickup sites and the delivery drop site
//! - The agent's final position and heading

use std::fmt::Write;
use std::path::Path;

use kshetra_arena::{Agent, Grid, GridCoord, TileKind};

use crate::error::Result;
use crate::trail::TrailSegment;

/// SVG color scheme for the report.
#[derive(Clone, Debug)]
pub struct SvgColorScheme {
    /// Border wall color
    pub wall: &'static str,
    /// Obstacle color
    pub obstacle: &'static str,
    /// Open tile color
    pub empty: &'static str,
    /// Marker fill color
    pub marker: &'static str,
    /// Agent fill color
    pub agent: &'static str,
    /// Trail colors by crossing ordinal: first, second, third+
    pub passes: [&'static str; 3],
    /// Pickup site outline color
    pub pickup: &'static str,
    /// Delivery drop site outline color
    pub drop: &'static str,
}

impl Default for SvgColorScheme {
    fn default() -> Self {
        Self {
            wall: "#333333",
            obstacle: "#777777",
            empty: "#FFFFFF",
            marker: "#CC8800",
            agent: "#2222AA",
            passes: ["#22AA22", "#DDAA00", "#AA2222"],
            pickup: "#22AA22",
            drop: "#AA22AA",
        }
    }
}

/// Configuration for SVG rendering.
#[derive(Clone, Debug)]
pub struct SvgConfig {
    /// Pixels per tile
    pub tile_size: f32,
    /// Trail line width
    pub trail_width: f32,
    /// Padding around the arena in pixels
    pub padding: f32,
    /// Color scheme
    pub colors: SvgColorScheme,
}

impl Default for SvgConfig {
    fn default() -> Self {
        Self {
            tile_size: 24.0,
            trail_width: 3.0,
            padding: 20.0,
            colors: SvgColorScheme::default(),
        }
    }
}

/// SVG report builder.
pub struct SvgRenderer<'a> {
    config: SvgConfig,
    grid: &'a Grid,
    trail: &'a [TrailSegment],
    pickups: &'a [GridCoord],
    drop_site: Option<GridCoord>,
    agent: Option<&'a Agent>,
    title: Option<String>,
}

impl<'a> SvgRenderer<'a> {
    /// Create a renderer for one arena.
    pub fn new(grid: &'a Grid, config: SvgConfig) -> Self {
        Self {
            config,
            grid,
            trail: &[],
            pickups: &[],
            drop_site: None,
            agent: None,
            title: None,
        }
    }

    /// Set a title to display.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Add the recorded movement trail.
    pub fn with_trail(mut self, trail: &'a [TrailSegment]) -> Self {
        self.trail = trail;
        self
    }

    /// Add pickup site outlines.
    pub fn with_pickups(mut self, pickups: &'a [GridCoord]) -> Self {
        self.pickups = pickups;
        self
    }

    /// Add the delivery drop site outline.
    pub fn with_drop_site(mut self, site: Option<GridCoord>) -> Self {
        self.drop_site = site;
        self
    }

    /// Add the agent's final pose.
    pub fn with_agent(mut self, agent: &'a Agent) -> Self {
        self.agent = Some(agent);
        self
    }

    /// Pixel center of a tile.
    fn center(&self, coord: GridCoord, title_height: f32) -> (f32, f32) {
        let t = self.config.tile_size;
        (
            self.config.padding + (coord.x as f32 + 0.5) * t,
            self.config.padding + title_height + (coord.y as f32 + 0.5) * t,
        )
    }

    /// Render to SVG string.
    pub fn render(&self) -> String {
        let mut svg = String::new();

        let t = self.config.tile_size;
        let padding = self.config.padding;
        let title_height = if self.title.is_some() { 30.0 } else { 0.0 };
        let width = self.grid.width() as f32 * t + 2.0 * padding;
        let height = self.grid.height() as f32 * t + 2.0 * padding + title_height;

        writeln!(&mut svg, r#"<?xml version="1.0" encoding="UTF-8"?>"#).unwrap();
        writeln!(
            &mut svg,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{:.0}" height="{:.0}" viewBox="0 0 {:.0} {:.0}">"#,
            width, height, width, height
        )
        .unwrap();
        writeln!(
            &mut svg,
            r##"  <rect width="100%" height="100%" fill="#F8F8F8"/>"##
        )
        .unwrap();

        if let Some(title) = &self.title {
            writeln!(
                &mut svg,
                r#"  <text x="{:.0}" y="22" font-family="sans-serif" font-size="16" text-anchor="middle">{}</text>"#,
                width / 2.0,
                title
            )
            .unwrap();
        }

        self.render_tiles(&mut svg, title_height);
        self.render_trail(&mut svg, title_height);
        self.render_pickups(&mut svg, title_height);
        if let Some(site) = self.drop_site {
            self.render_drop_site(&mut svg, site, title_height);
        }
        if let Some(agent) = self.agent {
            self.render_agent(&mut svg, agent, title_height);
        }

        writeln!(&mut svg, "</svg>").unwrap();
        svg
    }

    fn render_tiles(&self, svg: &mut String, title_height: f32) {
        let t = self.config.tile_size;
        let colors = &self.config.colors;

        for y in 0..self.grid.height() as i32 {
            for x in 0..self.grid.width() as i32 {
                let coord = GridCoord::new(x, y);
                let px = self.config.padding + x as f32 * t;
                let py = self.config.padding + title_height + y as f32 * t;

                let fill = match self.grid.tile(coord) {
                    TileKind::Wall => colors.wall,
                    TileKind::Obstacle => colors.obstacle,
                    TileKind::Empty | TileKind::Marker => colors.empty,
                };
                writeln!(
                    svg,
                    r##"  <rect x="{:.1}" y="{:.1}" width="{:.1}" height="{:.1}" fill="{}" stroke="#E0E0E0" stroke-width="0.5"/>"##,
                    px, py, t, t, fill
                )
                .unwrap();

                if self.grid.tile(coord) == TileKind::Marker {
                    let (cx, cy) = self.center(coord, title_height);
                    writeln!(
                        svg,
                        r#"  <circle cx="{:.1}" cy="{:.1}" r="{:.1}" fill="{}"/>"#,
                        cx,
                        cy,
                        t * 0.3,
                        colors.marker
                    )
                    .unwrap();
                }
            }
        }
    }

    fn render_trail(&self, svg: &mut String, title_height: f32) {
        for segment in self.trail {
            let (x1, y1) = self.center(segment.from, title_height);
            let (x2, y2) = self.center(segment.to, title_height);
            let ordinal = (segment.pass.max(1) as usize - 1).min(2);
            writeln!(
                svg,
                r#"  <line x1="{:.1}" y1="{:.1}" x2="{:.1}" y2="{:.1}" stroke="{}" stroke-width="{:.1}" stroke-linecap="round"/>"#,
                x1,
                y1,
                x2,
                y2,
                self.config.colors.passes[ordinal],
                self.config.trail_width
            )
            .unwrap();
        }
    }

    fn render_pickups(&self, svg: &mut String, title_height: f32) {
        for pickup in self.pickups {
            let (cx, cy) = self.center(*pickup, title_height);
            writeln!(
                svg,
                r#"  <circle cx="{:.1}" cy="{:.1}" r="{:.1}" fill="none" stroke="{}" stroke-width="1.5"/>"#,
                cx,
                cy,
                self.config.tile_size * 0.35,
                self.config.colors.pickup
            )
            .unwrap();
        }
    }

    fn render_drop_site(&self, svg: &mut String, site: GridCoord, title_height: f32) {
        let t = self.config.tile_size;
        let px = self.config.padding + site.x as f32 * t;
        let py = self.config.padding + title_height + site.y as f32 * t;
        writeln!(
            svg,
            r#"  <rect x="{:.1}" y="{:.1}" width="{:.1}" height="{:.1}" fill="none" stroke="{}" stroke-width="2"/>"#,
            px + 2.0,
            py + 2.0,
            t - 4.0,
            t - 4.0,
            self.config.colors.drop
        )
        .unwrap();
    }

    fn render_agent(&self, svg: &mut String, agent: &Agent, title_height: f32) {
        let (cx, cy) = self.center(agent.position(), title_height);
        let r = self.config.tile_size * 0.35;

        // Triangle apex along the heading, base behind.
        let (dx, dy) = agent.heading().delta();
        let (fx, fy) = (dx as f32, dy as f32);
        let apex = (cx + fx * r, cy + fy * r);
        // Perpendicular for the base corners.
        let (px, py) = (-fy, fx);
        let base_a = (cx - fx * r * 0.6 + px * r * 0.7, cy - fy * r * 0.6 + py * r * 0.7);
        let base_b = (cx - fx * r * 0.6 - px * r * 0.7, cy - fy * r * 0.6 - py * r * 0.7);

        writeln!(
            svg,
            r#"  <polygon points="{:.1},{:.1} {:.1},{:.1} {:.1},{:.1}" fill="{}"/>"#,
            apex.0,
            apex.1,
            base_a.0,
            base_a.1,
            base_b.0,
            base_b.1,
            self.config.colors.agent
        )
        .unwrap();
    }

    /// Render and write to a file, creating parent directories.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        std::fs::write(path, self.render())?;
        Ok(())
    }
}
