//! Body layout selection. Sections appear only in the slots the active
//! layout declares, in declared order.

use crate::models::section::SectionName;
use crate::models::template::BodyLayout;
use crate::render::sections::render_section;
use crate::render::tree::{AsymmetricBody, Body, GridBody, SectionBlock, SidebarBody};
use crate::render::RenderContext;

fn place(ctx: &RenderContext<'_>, slot: &[SectionName], compact: bool) -> Vec<SectionBlock> {
    slot.iter()
        .filter_map(|name| render_section(ctx, name, compact))
        .collect()
}

pub fn render_body(ctx: &RenderContext<'_>) -> Body {
    let c = ctx.colors;
    match &ctx.template.layout.body {
        BodyLayout::SingleColumn { sections } => Body::SingleColumn {
            sections: place(ctx, sections, false),
        },
        BodyLayout::SidebarLeft(g) | BodyLayout::SidebarRight(g) => {
            let body = SidebarBody {
                sidebar_width: g.sidebar_width.clone(),
                main_width: g.main_width.clone(),
                sidebar_background: c.sidebar_bg().to_string(),
                sidebar: place(ctx, &g.sidebar_sections, true),
                main: place(ctx, &g.main_sections, false),
            };
            if matches!(ctx.template.layout.body, BodyLayout::SidebarLeft(_)) {
                Body::SidebarLeft(body)
            } else {
                Body::SidebarRight(body)
            }
        }
        BodyLayout::Asymmetric(g) => Body::Asymmetric(AsymmetricBody {
            left_width: g.left_width.clone(),
            right_width: g.right_width.clone(),
            accent_shape: g.accent_shapes.then(|| c.shapes().to_string()),
            left: place(ctx, &g.left_sections, false),
            right: place(ctx, &g.right_sections, false),
        }),
        BodyLayout::GridMasonry(g) => Body::GridMasonry(GridBody {
            columns: g.columns,
            gap: g.gap.clone(),
            cell_background: c.cards().to_string(),
            cell_border: g.card_borders.then(|| c.accent_tint()),
            shadow: None,
            cells: place(ctx, &g.sections, false),
        }),
        BodyLayout::GridCards(g) => Body::GridCards(GridBody {
            columns: g.columns,
            gap: g.gap.clone(),
            cell_background: c.cards().to_string(),
            cell_border: None,
            shadow: Some(g.shadow),
            cells: place(ctx, &g.sections, false),
        }),
        BodyLayout::TimelineVertical { sections } => Body::TimelineVertical {
            sections: place(ctx, sections, false),
        },
        BodyLayout::HeaderHero {
            sections,
            card_style,
        } => Body::HeaderHero {
            card_background: card_style.then(|| c.background.clone()),
            sections: place(ctx, sections, false),
        },
    }
}
