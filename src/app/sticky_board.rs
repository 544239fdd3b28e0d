use leptos::{ev, html, prelude::*};
use leptos_use::use_resize_observer;

use crate::{
    board::{Board, BoardMetrics, ContainerRect, DragListeners, Point, Release},
    content::{Note, NOTES},
};

impl Release for WindowListenerHandle {
    fn release(self) {
        self.remove();
    }
}

fn container_rect(container: NodeRef<html::Div>) -> Option<ContainerRect> {
    let el = container.get_untracked()?;
    let rect = el.get_bounding_client_rect();
    Some(ContainerRect::new(
        rect.left(),
        rect.top(),
        rect.width(),
        rect.height(),
    ))
}

fn mouse_point(ev: &ev::MouseEvent) -> Point {
    Point::new(f64::from(ev.client_x()), f64::from(ev.client_y()))
}

fn touch_point(ev: &ev::TouchEvent) -> Option<Point> {
    let touch = ev.touches().get(0).or_else(|| ev.changed_touches().get(0))?;
    Some(Point::new(
        f64::from(touch.client_x()),
        f64::from(touch.client_y()),
    ))
}

/// Draggable sticky notes laid out on a cork-style board.
///
/// Window-level move/up listeners only exist while a note is being dragged.
#[component]
pub fn StickyBoard() -> impl IntoView {
    let container = NodeRef::<html::Div>::new();
    let board = RwSignal::new(Board::new(NOTES.len(), BoardMetrics::default()));
    let listeners = StoredValue::new_local(DragListeners::<WindowListenerHandle>::default());

    use_resize_observer(container, move |_, _| {
        let size = container_rect(container).map(|r| r.size);
        board.update(|b| b.relayout(size));
    });

    let release_listeners = move || {
        if let Some(count) = listeners.try_update_value(DragListeners::release) {
            if count > 0 {
                log::trace!("dropped {count} drag listeners");
            }
        }
    };

    let drag_to = move |client: Point| {
        board.update(|b| {
            b.drag_to(client);
        });
    };

    let end_drag = move || {
        if let Some(Some(index)) = board.try_update(Board::end_drag) {
            log::debug!("released note {index}");
        }
        release_listeners();
    };

    let subscribe = move || {
        vec![
            window_event_listener(ev::mousemove, move |ev| drag_to(mouse_point(&ev))),
            window_event_listener(ev::mouseup, move |_| end_drag()),
            window_event_listener(ev::touchmove, move |ev| {
                if let Some(point) = touch_point(&ev) {
                    drag_to(point);
                }
            }),
            window_event_listener(ev::touchend, move |_| end_drag()),
            window_event_listener(ev::touchcancel, move |_| end_drag()),
        ]
    };

    let begin_drag = move |index: usize, client: Point| {
        let rect = container_rect(container);
        let started = board
            .try_update(|b| b.begin_drag(index, client, rect))
            .unwrap_or(false);
        listeners.try_update_value(|l| l.attach(started, subscribe));
    };

    on_cleanup(release_listeners);

    let note_view = move |index: usize, note: Note| {
        let style = move || {
            board.with(|b| {
                let Point { x, y } = b.position(index).unwrap_or_default();
                let card = b.card_size();
                let dragging = b.is_dragging(index);
                format!(
                    "left:{x}px;top:{y}px;width:{}px;height:{}px;background-color:{};transform:rotate({}deg) scale({});z-index:{};touch-action:none;",
                    card.width,
                    card.height,
                    note.color,
                    if dragging { 0.0 } else { note.rotate },
                    if dragging { 1.05 } else { 1.0 },
                    if dragging { 50 } else { 10 },
                )
            })
        };
        let class = move || {
            if board.with(|b| b.is_dragging(index)) {
                "absolute select-none rounded-sm p-4 shadow-2xl cursor-grabbing"
            } else {
                "absolute select-none rounded-sm p-4 shadow-md cursor-grab transition-transform duration-200"
            }
        };
        view! {
            <div
                class=class
                style=style
                data-note=note.id
                on:mousedown=move |ev: ev::MouseEvent| {
                    if ev.button() != 0 {
                        return;
                    }
                    ev.prevent_default();
                    begin_drag(index, mouse_point(&ev));
                }
                on:touchstart=move |ev: ev::TouchEvent| {
                    if let Some(point) = touch_point(&ev) {
                        begin_drag(index, point);
                    }
                }
            >
                <svg
                    class="absolute -top-2 left-1/2 -translate-x-1/2"
                    width="18"
                    height="18"
                    viewBox="0 0 18 18"
                    aria-hidden="true"
                >
                    <circle cx="9" cy="9" r="7" fill=note.pin_color />
                    <circle cx="7" cy="7" r="2" fill="white" fill-opacity="0.6" />
                </svg>
                <h3 class="mb-2 font-bold text-gray-800">{note.title}</h3>
                <p class="text-sm leading-snug text-gray-700">{note.content}</p>
            </div>
        }
    };

    view! {
        <div
            node_ref=container
            class="relative w-full h-[420px] md:h-[460px] overflow-hidden rounded-2xl border bg-[#F5EFE3]"
        >
            // nothing to place until the first layout pass
            <Show when=move || board.with(|b| !b.positions().is_empty())>
                {NOTES
                    .into_iter()
                    .enumerate()
                    .map(|(index, note)| note_view(index, note))
                    .collect_view()}
            </Show>
        </div>
    }
}
