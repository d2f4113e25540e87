use crate::config::Palette;
use crate::errors::AppResult;
use crate::models::pixel_rect::{BarKind, IdleMarker, PixelRect};
use crate::models::week_chart::WeekChart;
use crate::utils::colors::{Rgba, parse_hex};
use pdf_writer::{Content, Name, Pdf, Rect, Ref, Str};
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Bezier handle length for a quarter circle.
const KAPPA: f32 = 0.552_284_8;

struct Colors {
    on_duty: Rgba,
    idle: Rgba,
    full: Rgba,
    axis_line: Rgba,
    axis_text: Rgba,
}

/// Single-page PDF rendering of a [`WeekChart`].
///
/// Chart coordinates have their origin top-left; PDF user space grows
/// upwards, so every y goes through [`ChartPdf::flip`].
pub struct ChartPdf {
    pdf: Pdf,
    catalog_id: Ref,
    pages_id: Ref,
    page_id: Ref,
    content_id: Ref,
    font_id: Ref,

    page_w: f32,
    page_h: f32,
    margin: f32,
    title_h: f32,

    font_size: f32,
    title_font_size: f32,

    colors: Colors,
}

impl ChartPdf {
    pub fn new(chart: &WeekChart, palette: &Palette) -> AppResult<Self> {
        let mut pdf = Pdf::new();

        let catalog_id = Ref::new(1);
        let pages_id = Ref::new(2);
        let font_id = Ref::new(3);
        let page_id = Ref::new(4);
        let content_id = Ref::new(5);

        pdf.type1_font(font_id).base_font(Name(b"Helvetica"));

        let margin = 30.0;
        let title_h = 30.0;

        Ok(Self {
            pdf,
            catalog_id,
            pages_id,
            page_id,
            content_id,
            font_id,
            page_w: chart.frame.width + 2.0 * margin,
            page_h: chart.frame.height + 2.0 * margin + title_h,
            margin,
            title_h,
            font_size: 10.0,
            title_font_size: 14.0,
            colors: Colors {
                on_duty: parse_hex(&palette.on_duty)?,
                idle: parse_hex(&palette.idle)?,
                full: parse_hex(&palette.full)?,
                axis_line: parse_hex(&palette.axis_line)?,
                axis_text: parse_hex(&palette.axis_text)?,
            },
        })
    }

    /// Chart-local y (top-down) to PDF y (bottom-up).
    fn flip(&self, y: f32) -> f32 {
        self.page_h - self.margin - self.title_h - y
    }

    /// Chart-local x to PDF x.
    fn shift(&self, x: f32) -> f32 {
        self.margin + x
    }

    fn draw_text(&self, content: &mut Content, x: f32, y: f32, size: f32, text: &str) {
        let (r, g, b) = self.colors.axis_text.over_white();
        content.save_state();
        content.set_fill_rgb(r, g, b);
        content.begin_text();
        content.set_font(Name(b"F1"), size);
        content.set_text_matrix([1.0, 0.0, 0.0, 1.0, x, y]);
        content.show(Str(text.as_bytes()));
        content.end_text();
        content.restore_state();
    }

    fn fill_rect(&self, content: &mut Content, rect: &PixelRect) {
        let color = match rect.kind {
            BarKind::OnDuty => self.colors.on_duty,
            BarKind::Idle => self.colors.idle,
            BarKind::Full => self.colors.full,
        };
        let (r, g, b) = color.over_white();

        content.save_state();
        content.set_fill_rgb(r, g, b);
        content.rect(
            self.shift(rect.x),
            self.flip(rect.bottom()),
            rect.width,
            rect.height,
        );
        content.fill_nonzero();
        content.restore_state();
    }

    /// Circle with an exclamation mark, as on idle bars of the web chart.
    fn draw_marker(&self, content: &mut Content, marker: &IdleMarker) {
        let (r, g, b) = self.colors.idle.over_white();
        let cx = self.shift(marker.cx);
        let cy = self.flip(marker.cy);
        let rad = marker.radius;
        let k = rad * KAPPA;

        content.save_state();
        content.set_stroke_rgb(r * 0.7, g * 0.7, b * 0.7);
        content.set_line_width(1.0);

        content.move_to(cx + rad, cy);
        content.cubic_to(cx + rad, cy + k, cx + k, cy + rad, cx, cy + rad);
        content.cubic_to(cx - k, cy + rad, cx - rad, cy + k, cx - rad, cy);
        content.cubic_to(cx - rad, cy - k, cx - k, cy - rad, cx, cy - rad);
        content.cubic_to(cx + k, cy - rad, cx + rad, cy - k, cx + rad, cy);
        content.close_path();

        // bang: bar then dot
        content.move_to(cx, cy + rad - 2.0);
        content.line_to(cx, cy - rad + 6.0);
        content.move_to(cx, cy - rad + 4.0);
        content.line_to(cx, cy - rad + 2.0);
        content.stroke();
        content.restore_state();
    }

    fn draw_frame(&self, content: &mut Content, chart: &WeekChart) {
        let frame = &chart.frame;

        self.draw_text(
            content,
            self.margin,
            self.page_h - self.margin - self.title_font_size,
            self.title_font_size,
            &format!("{} ({} / {})", chart.title, chart.week_start, chart.week_end),
        );

        for tick in &frame.hour_ticks {
            self.draw_text(
                content,
                self.shift(tick.x),
                self.flip(frame.plot_top / 2.0 + self.font_size / 2.0),
                self.font_size,
                &tick.label,
            );
        }
        self.draw_text(
            content,
            self.shift(frame.width - 20.0),
            self.flip(frame.plot_top / 2.0 + self.font_size / 2.0),
            self.font_size,
            "/h",
        );

        let row_h = frame
            .grid_lines
            .windows(2)
            .next()
            .map(|w| w[1] - w[0])
            .unwrap_or_default();

        for row in &frame.rows {
            self.draw_text(
                content,
                self.shift(frame.plot_left / 6.0),
                self.flip(row.y + row_h / 3.0 + self.font_size / 2.0),
                self.font_size,
                &row.name,
            );
            self.draw_text(
                content,
                self.shift(frame.plot_left / 6.0),
                self.flip(row.y + row_h * 2.0 / 3.0 + self.font_size / 2.0),
                self.font_size,
                &row.date,
            );
        }

        let (r, g, b) = self.colors.axis_line.over_white();
        content.save_state();
        content.set_stroke_rgb(r, g, b);
        content.set_line_width(1.0);
        for y in &frame.grid_lines {
            content.move_to(self.shift(0.0), self.flip(*y));
            content.line_to(self.shift(frame.width), self.flip(*y));
        }
        content.stroke();
        content.restore_state();
    }

    /// Draw the chart on the (single) page.
    pub fn render(&mut self, chart: &WeekChart) {
        let mut content = Content::new();

        self.draw_frame(&mut content, chart);

        for day in &chart.days {
            for rect in &day.rects {
                self.fill_rect(&mut content, rect);
            }
            for marker in day.rects.iter().filter_map(|r| r.marker.as_ref()) {
                self.draw_marker(&mut content, marker);
            }
        }

        {
            let mut page = self.pdf.page(self.page_id);
            page.parent(self.pages_id)
                .media_box(Rect::new(0.0, 0.0, self.page_w, self.page_h))
                .contents(self.content_id);
            page.resources().fonts().pair(Name(b"F1"), self.font_id);
        }

        self.pdf.stream(self.content_id, &content.finish());
    }

    pub fn finish(mut self) -> Vec<u8> {
        self.pdf.catalog(self.catalog_id).pages(self.pages_id);
        self.pdf.pages(self.pages_id).kids([self.page_id]).count(1);
        self.pdf.finish()
    }

    pub fn save(self, path: &Path) -> std::io::Result<()> {
        let bytes = self.finish();
        let mut f = File::create(path)?;
        f.write_all(&bytes)?;
        Ok(())
    }
}
