//! Layout strategies.
//!
//! One pure function per [`LayoutId`], looked up through a static table
//! indexed by the layout. Adding a layout means adding a variant and a row
//! here; nothing else dispatches on layout kind.

use super::cells::{raw_fields, schema_fields, title_and_fields};
use super::table::tabulate;
use super::{Body, ItemContent, ItemView, TableBody, TableRow};
use crate::model::{ColumnDefinition, ColumnKey, LayoutId, Record};
use crate::state::SelectionSet;
use std::fmt;
use std::rc::Rc;

/// Fields shown under the title on a card.
pub const CARD_FIELD_CAP: usize = 3;
/// Fields shown after the primary line of a list row.
pub const LIST_FIELD_CAP: usize = 4;
/// Fields shown under the title of a grid tile.
pub const GRID_FIELD_CAP: usize = 1;

/// Caller renderer for cards, list rows, or grid tiles.
pub type ItemRenderer = Rc<dyn Fn(&Record) -> Vec<String>>;

/// Caller renderer for the classic layout. Receives the record, the visible
/// column keys in schema order, and whether the record is selected.
pub type ClassicRenderer = Rc<dyn Fn(&Record, &[ColumnKey], bool) -> Vec<String>>;

/// Optional caller-supplied item renderers.
#[derive(Clone, Default)]
pub struct Renderers {
    /// Replaces the classic layout; without it classic falls back to cards.
    pub classic: Option<ClassicRenderer>,
    /// Replaces card field rendering.
    pub card: Option<ItemRenderer>,
    /// Replaces list row field rendering.
    pub list_item: Option<ItemRenderer>,
    /// Replaces grid tile field rendering.
    pub grid_item: Option<ItemRenderer>,
}

impl fmt::Debug for Renderers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Renderers")
            .field("classic", &self.classic.is_some())
            .field("card", &self.card.is_some())
            .field("list_item", &self.list_item.is_some())
            .field("grid_item", &self.grid_item.is_some())
            .finish()
    }
}

/// Everything a strategy needs to lay out the body.
pub struct LayoutContext<'a> {
    /// Records in display order.
    pub records: &'a [Record],
    /// Visible columns of the active layout, in schema order.
    pub columns: &'a [&'a ColumnDefinition],
    /// No schema was supplied, so items fall back to raw record fields.
    pub schema_empty: bool,
    /// `None` when bulk actions are disabled and nothing is selectable.
    pub selection: Option<&'a SelectionSet>,
    /// Caller renderers.
    pub renderers: &'a Renderers,
}

impl LayoutContext<'_> {
    fn selected(&self, record: &Record) -> Option<bool> {
        self.selection.map(|s| s.contains(record.id()))
    }

    fn fields(&self, record: &Record, cap: usize) -> ItemContent {
        let fields = if self.schema_empty {
            raw_fields(record)
        } else {
            schema_fields(record, self.columns)
        };
        let (title, fields) = title_and_fields(record, fields, cap);
        ItemContent::Fields { title, fields }
    }

    fn items(&self, cap: usize, custom: Option<&ItemRenderer>) -> Vec<ItemView> {
        self.records
            .iter()
            .map(|record| ItemView {
                id: record.id().clone(),
                selected: self.selected(record),
                content: match custom {
                    Some(render) => ItemContent::Custom(render(record)),
                    None => self.fields(record, cap),
                },
            })
            .collect()
    }
}

/// Pure body builder for one layout.
pub type LayoutStrategy = fn(&LayoutContext<'_>) -> Body;

/// Indexed by `LayoutId::index`, in canonical order.
static STRATEGIES: [LayoutStrategy; 5] = [
    render_classic,
    render_table,
    render_cards,
    render_list,
    render_grid,
];

/// Strategy of `layout`.
pub fn strategy_for(layout: LayoutId) -> LayoutStrategy {
    STRATEGIES[layout.index()]
}

fn render_classic(ctx: &LayoutContext<'_>) -> Body {
    let Some(render) = &ctx.renderers.classic else {
        return render_cards(ctx);
    };
    let keys: Vec<ColumnKey> = ctx.columns.iter().map(|c| c.key().clone()).collect();
    let items = ctx
        .records
        .iter()
        .map(|record| {
            let selected = ctx.selected(record);
            ItemView {
                id: record.id().clone(),
                selected,
                content: ItemContent::Custom(render(record, &keys, selected.unwrap_or(false))),
            }
        })
        .collect();
    Body::Classic(items)
}

fn render_table(ctx: &LayoutContext<'_>) -> Body {
    let (headers, cells) = tabulate(ctx.records, ctx.columns, ctx.schema_empty);
    let rows = ctx
        .records
        .iter()
        .zip(cells)
        .map(|(record, cells)| TableRow {
            id: record.id().clone(),
            selected: ctx.selected(record),
            cells,
        })
        .collect();
    Body::Table(TableBody {
        select_header: ctx.selection.map(|s| s.header_state(ctx.records)),
        headers,
        rows,
    })
}

fn render_cards(ctx: &LayoutContext<'_>) -> Body {
    Body::Cards(ctx.items(CARD_FIELD_CAP, ctx.renderers.card.as_ref()))
}

fn render_list(ctx: &LayoutContext<'_>) -> Body {
    Body::List(ctx.items(LIST_FIELD_CAP, ctx.renderers.list_item.as_ref()))
}

fn render_grid(ctx: &LayoutContext<'_>) -> Body {
    Body::Grid(ctx.items(GRID_FIELD_CAP, ctx.renderers.grid_item.as_ref()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::RecordId;
    use crate::state::HeaderCheckbox;
    use serde_json::json;

    fn key(s: &str) -> ColumnKey {
        ColumnKey::new(s).unwrap()
    }

    fn records() -> Vec<Record> {
        vec![
            serde_json::from_value(json!({"id": "a", "name": "Alpha", "sku": "A1", "qty": 1, "bin": "x", "owner": "o", "notes": "n"})).unwrap(),
            serde_json::from_value(json!({"id": "b", "name": "Beta", "sku": "B2", "qty": 2, "bin": "y", "owner": "p", "notes": "m"})).unwrap(),
        ]
    }

    fn schema() -> Vec<ColumnDefinition> {
        ["name", "sku", "qty", "bin", "owner", "notes"]
            .iter()
            .map(|k| ColumnDefinition::new(key(k), *k))
            .collect()
    }

    fn run(layout: LayoutId, renderers: &Renderers, selection: Option<&SelectionSet>) -> Body {
        let records = records();
        let schema = schema();
        let columns: Vec<&ColumnDefinition> = schema.iter().collect();
        let ctx = LayoutContext {
            records: &records,
            columns: &columns,
            schema_empty: false,
            selection,
            renderers,
        };
        strategy_for(layout)(&ctx)
    }

    fn field_count(body: &Body) -> usize {
        let items = match body {
            Body::Cards(items) | Body::List(items) | Body::Grid(items) => items,
            other => panic!("unexpected body {other:?}"),
        };
        match &items[0].content {
            ItemContent::Fields { fields, .. } => fields.len(),
            ItemContent::Custom(_) => panic!("expected fields"),
        }
    }

    #[test]
    fn each_layout_resolves_to_its_body() {
        let renderers = Renderers::default();
        assert!(matches!(run(LayoutId::Table, &renderers, None), Body::Table(_)));
        assert!(matches!(run(LayoutId::Cards, &renderers, None), Body::Cards(_)));
        assert!(matches!(run(LayoutId::List, &renderers, None), Body::List(_)));
        assert!(matches!(run(LayoutId::Grid, &renderers, None), Body::Grid(_)));
    }

    #[test]
    fn field_caps_per_layout() {
        let renderers = Renderers::default();
        assert_eq!(field_count(&run(LayoutId::Cards, &renderers, None)), CARD_FIELD_CAP);
        assert_eq!(field_count(&run(LayoutId::List, &renderers, None)), LIST_FIELD_CAP);
        assert_eq!(field_count(&run(LayoutId::Grid, &renderers, None)), GRID_FIELD_CAP);
    }

    #[test]
    fn cards_use_first_visible_column_as_title() {
        let body = run(LayoutId::Cards, &Renderers::default(), None);
        let Body::Cards(items) = body else {
            panic!("expected cards");
        };
        let ItemContent::Fields { title, fields } = &items[1].content else {
            panic!("expected fields");
        };
        assert_eq!(title, "Beta");
        assert_eq!(fields[0].value, "B2");
    }

    #[test]
    fn cards_without_schema_title_from_first_field() {
        let records: Vec<Record> =
            vec![serde_json::from_value(json!({"id": "1", "title": "Widget", "amount": 5})).unwrap()];
        let renderers = Renderers::default();
        let ctx = LayoutContext {
            records: &records,
            columns: &[],
            schema_empty: true,
            selection: None,
            renderers: &renderers,
        };
        let Body::Cards(items) = strategy_for(LayoutId::Cards)(&ctx) else {
            panic!("expected cards");
        };
        let ItemContent::Fields { title, fields } = &items[0].content else {
            panic!("expected fields");
        };
        assert_eq!(title, "Widget");
        assert_eq!(fields[0].label, "Amount");
    }

    #[test]
    fn classic_without_renderer_falls_back_to_cards() {
        let body = run(LayoutId::Classic, &Renderers::default(), None);
        assert!(matches!(body, Body::Cards(_)), "got {body:?}");
    }

    #[test]
    fn classic_renderer_receives_visible_keys_and_selection() {
        let renderers = Renderers {
            classic: Some(Rc::new(|record: &Record, keys: &[ColumnKey], selected: bool| {
                vec![format!("{} {} {}", record.id(), keys.len(), selected)]
            })),
            ..Renderers::default()
        };
        let mut selection = SelectionSet::new();
        selection.toggle(&RecordId::new("a").unwrap(), true);

        let Body::Classic(items) = run(LayoutId::Classic, &renderers, Some(&selection)) else {
            panic!("expected classic body");
        };
        assert_eq!(items[0].content, ItemContent::Custom(vec!["a 6 true".to_string()]));
        assert_eq!(items[1].content, ItemContent::Custom(vec!["b 6 false".to_string()]));
    }

    #[test]
    fn custom_card_renderer_replaces_fields() {
        let renderers = Renderers {
            card: Some(Rc::new(|record: &Record| vec![format!("card {}", record.id())])),
            ..Renderers::default()
        };
        let Body::Cards(items) = run(LayoutId::Cards, &renderers, None) else {
            panic!("expected cards");
        };
        assert_eq!(items[0].content, ItemContent::Custom(vec!["card a".to_string()]));
    }

    #[test]
    fn table_has_select_column_only_with_selection() {
        let Body::Table(plain) = run(LayoutId::Table, &Renderers::default(), None) else {
            panic!("expected table");
        };
        assert!(plain.select_header.is_none());
        assert!(plain.rows.iter().all(|r| r.selected.is_none()));

        let mut selection = SelectionSet::new();
        selection.toggle(&RecordId::new("b").unwrap(), true);
        let Body::Table(selectable) = run(LayoutId::Table, &Renderers::default(), Some(&selection))
        else {
            panic!("expected table");
        };
        assert_eq!(selectable.select_header, Some(HeaderCheckbox::Indeterminate));
        assert_eq!(selectable.rows[1].selected, Some(true));
    }
}
