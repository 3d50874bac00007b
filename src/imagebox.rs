use crate::colour::Colour;
use crate::error::TextboxError;
use crate::geom::Rect;
use crate::image::ImageSource;
use crate::target::DrawTarget;
use crate::units::Pt;

/// How an image is scaled into its box, following the CSS `object-fit`
/// keywords
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum ObjectFit {
    /// Largest scale at which the whole image fits, centred
    Contain,
    /// Smallest scale at which the image covers the box, overflow cropped
    /// symmetrically
    #[default]
    Cover,
    /// Stretch to the box size, ignoring the aspect ratio
    Fill,
    /// Native image size, centred
    None,
}

/// Scaling and positioning of the image inside its box
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ImageFitOptions {
    pub opacity: Option<f32>,
    pub object_fit: ObjectFit,
    /// Horizontal offset applied after centring, as a percentage of the
    /// drawn (post-scale) width, i.e. CSS background-position semantics
    pub offset_x_pct: f32,
    /// Vertical offset as a percentage of the drawn height
    pub offset_y_pct: f32,
    /// Extra scale factor on top of the object-fit ratio
    pub scale: f32,
}

impl Default for ImageFitOptions {
    fn default() -> ImageFitOptions {
        ImageFitOptions {
            opacity: None,
            object_fit: ObjectFit::default(),
            offset_x_pct: 0.0,
            offset_y_pct: 0.0,
            scale: 1.0,
        }
    }
}

impl ImageFitOptions {
    /// Compute the draw rectangle for an image of `image_px` pixels fitted
    /// into a `container` box, relative to the container origin. The
    /// rectangle may extend outside the container (cover, none, scale > 1);
    /// clipping is the caller's business.
    pub fn placement(&self, container: (Pt, Pt), image_px: (f32, f32)) -> Rect {
        let (container_w, container_h) = (container.0 .0, container.1 .0);
        let (image_w, image_h) = image_px;

        let mut draw_w = container_w;
        let mut draw_h = container_h;
        let mut dx = 0.0;
        let mut dy = 0.0;

        match self.object_fit {
            ObjectFit::Contain => {
                let ratio = (container_w / image_w).min(container_h / image_h) * self.scale;
                draw_w = image_w * ratio;
                draw_h = image_h * ratio;
                dx = (container_w - draw_w) / 2.0;
                dy = (container_h - draw_h) / 2.0;
            }
            ObjectFit::Cover => {
                let ratio = (container_w / image_w).max(container_h / image_h) * self.scale;
                draw_w = image_w * ratio;
                draw_h = image_h * ratio;
                let overflow_x = draw_w - container_w;
                let overflow_y = draw_h - container_h;
                dx = -overflow_x / 2.0;
                dy = -overflow_y / 2.0;
            }
            ObjectFit::Fill => {
                draw_w = container_w * self.scale;
                draw_h = container_h * self.scale;
                dx = (container_w - draw_w) / 2.0;
                dy = (container_h - draw_h) / 2.0;
            }
            ObjectFit::None => {
                draw_w = image_w * self.scale;
                draw_h = image_h * self.scale;
                dx = (container_w - draw_w) / 2.0;
                dy = (container_h - draw_h) / 2.0;
            }
        }

        // offsets move by a percentage of the drawn size, not the container
        dx += self.offset_x_pct / 100.0 * draw_w;
        dy += self.offset_y_pct / 100.0 * draw_h;

        Rect::new(Pt(dx), Pt(dy), Pt(draw_w), Pt(draw_h))
    }
}

/// The shape an image box is clipped, filled, and stroked with
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ClipShape {
    /// No clipping; fill and stroke draw nothing
    #[default]
    None,
    /// The box rectangle, optionally with rounded corners
    Rect { radius: Option<Pt> },
    /// The largest circle centred in the box
    Circle,
    /// An ellipse with explicit radii, centred in the box
    Ellipse { rx: Pt, ry: Pt },
    /// An arbitrary polygon, points relative to the box origin
    Polygon { points: Vec<(Pt, Pt)> },
}

impl ClipShape {
    /// Resolve the shape to a concrete path inside `bounds`, grown or shrunk
    /// by `offset` for stroke alignment. A positive offset insets rects and
    /// grows circle/ellipse radii, matching how a centred stroke is pulled
    /// inside or pushed outside the geometry. Polygon points are translated
    /// by the box origin only and receive no stroke-alignment offset.
    pub fn path(&self, bounds: &Rect, offset: Pt) -> Option<ShapePath> {
        match self {
            ClipShape::None => None,
            ClipShape::Rect { radius } => {
                let rect = bounds.inset(offset);
                match radius {
                    Some(radius) if *radius > Pt::ZERO => Some(ShapePath::RoundedRect {
                        rect,
                        radius: (*radius - offset).max(Pt::ZERO),
                    }),
                    _ => Some(ShapePath::Rect { rect }),
                }
            }
            ClipShape::Circle => {
                let (cx, cy) = bounds.centre();
                let radius = bounds.width.min(bounds.height) / 2.0 + offset;
                Some(ShapePath::Circle { cx, cy, radius })
            }
            ClipShape::Ellipse { rx, ry } => {
                let (cx, cy) = bounds.centre();
                Some(ShapePath::Ellipse {
                    cx,
                    cy,
                    rx: *rx + offset,
                    ry: *ry + offset,
                })
            }
            ClipShape::Polygon { points } => Some(ShapePath::Polygon {
                points: points
                    .iter()
                    .map(|&(x, y)| (bounds.x + x, bounds.y + y))
                    .collect(),
            }),
        }
    }
}

/// A resolved clip/fill/stroke path in canvas coordinates, ready for the
/// draw target
#[derive(Debug, Clone, PartialEq)]
pub enum ShapePath {
    Rect { rect: Rect },
    RoundedRect { rect: Rect, radius: Pt },
    Circle { cx: Pt, cy: Pt, radius: Pt },
    Ellipse { cx: Pt, cy: Pt, rx: Pt, ry: Pt },
    Polygon { points: Vec<(Pt, Pt)> },
}

/// Where the stroke sits relative to the shape outline
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum StrokeAlign {
    #[default]
    Center,
    Inside,
    Outside,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum LineCap {
    Butt,
    Round,
    Square,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum LineJoin {
    Miter,
    Round,
    Bevel,
}

/// Dash pattern for a stroked outline
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct DashPattern {
    pub length: Pt,
    pub space: Option<Pt>,
    pub phase: Option<Pt>,
}

/// Pen settings for stroking the box shape
#[derive(Debug, Clone, PartialEq)]
pub struct StrokeOptions {
    pub width: Pt,
    pub colour: Option<Colour>,
    pub opacity: Option<f32>,
    pub cap: Option<LineCap>,
    pub join: Option<LineJoin>,
    pub dash: Option<DashPattern>,
    pub align: StrokeAlign,
}

impl Default for StrokeOptions {
    fn default() -> StrokeOptions {
        StrokeOptions {
            width: Pt(1.0),
            colour: None,
            opacity: None,
            cap: None,
            join: None,
            dash: None,
            align: StrokeAlign::default(),
        }
    }
}

impl StrokeOptions {
    /// The path offset implied by the stroke alignment: half the stroke
    /// width inwards for `inside`, outwards for `outside`
    pub fn path_offset(&self) -> Pt {
        match self.align {
            StrokeAlign::Inside => self.width / 2.0,
            StrokeAlign::Outside => Pt::ZERO - self.width / 2.0,
            StrokeAlign::Center => Pt::ZERO,
        }
    }
}

/// Fill drawn over the image in the box shape
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct FillOptions {
    pub colour: Colour,
    pub opacity: Option<f32>,
}

/// Everything describing one placed image: where the box sits, how the
/// image is fitted into it, and the shape it is clipped, filled, and
/// stroked with
#[derive(Debug, Clone, PartialEq)]
pub struct ImageBoxOptions {
    pub bounds: Rect,
    pub clip: ClipShape,
    pub stroke: Option<StrokeOptions>,
    pub fill: Option<FillOptions>,
    pub image: Option<ImageFitOptions>,
}

impl ImageBoxOptions {
    pub fn new(bounds: Rect) -> ImageBoxOptions {
        ImageBoxOptions {
            bounds,
            clip: ClipShape::None,
            stroke: None,
            fill: None,
            image: Some(ImageFitOptions::default()),
        }
    }
}

/// Place an image into its box: clip, draw the fitted image, then lay the
/// optional fill and stroke shapes over it. Emits, in order:
///
/// 1. save / clip (zero-offset shape, when the shape is not `None`) /
///    image / restore, with the image opacity set and reset around the draw
/// 2. the filled shape at zero offset, with its opacity set and reset
/// 3. the stroked shape at the stroke-aligned offset, with its opacity set
///    and reset
///
/// Passing [None] for the image is fatal to this placement call: an image
/// box without a resolvable source is a caller bug, not something to skip
/// silently.
pub fn place_image<T: DrawTarget>(
    target: &mut T,
    image: Option<&ImageSource>,
    options: &ImageBoxOptions,
) -> Result<(), TextboxError> {
    let image = image.ok_or(TextboxError::ImageSourceMissing)?;
    let bounds = options.bounds;

    let fit = match &options.image {
        Some(fit_options) => fit_options
            .placement((bounds.width, bounds.height), (image.width, image.height))
            .translated(bounds.x, bounds.y),
        None => bounds,
    };

    target.save();
    if let Some(path) = options.clip.path(&bounds, Pt::ZERO) {
        target.clip(&path);
    }
    let image_opacity = options.image.as_ref().and_then(|fit| fit.opacity);
    if let Some(opacity) = image_opacity {
        target.set_opacity(opacity);
    }
    target.draw_image(image, fit);
    if image_opacity.is_some() {
        target.set_opacity(1.0);
    }
    target.restore();

    if let Some(fill) = &options.fill {
        if let Some(path) = options.clip.path(&bounds, Pt::ZERO) {
            target.save();
            if let Some(opacity) = fill.opacity {
                target.set_fill_opacity(opacity);
            }
            target.fill_path(&path, fill.colour);
            if fill.opacity.is_some() {
                target.set_fill_opacity(1.0);
            }
            target.restore();
        }
    }

    if let Some(stroke) = &options.stroke {
        if let Some(path) = options.clip.path(&bounds, stroke.path_offset()) {
            target.save();
            if let Some(opacity) = stroke.opacity {
                target.set_stroke_opacity(opacity);
            }
            target.stroke_path(&path, stroke);
            if stroke.opacity.is_some() {
                target.set_stroke_opacity(1.0);
            }
            target.restore();
        }
    }

    Ok(())
}
