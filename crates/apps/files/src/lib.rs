//! File Manager app: browses the bundled media catalog as a small folder tree and hands media
//! files to the photo and video viewers.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod tree;

use desktop_app_contract::AppMountContext;
use leptos::*;
use system_ui::prelude::*;

use crate::tree::{
    build_file_tree, open_action, FileKind, FileNavigator, FileNode, OpenAction, PICTURES_ID,
    ROOT_ID, VIDEOS_ID,
};

const QUICK_LINKS: [(&str, &str, IconName); 3] = [
    (ROOT_ID, "This PC", IconName::HardDrive),
    (PICTURES_ID, "Pictures", IconName::Image),
    (VIDEOS_ID, "Videos", IconName::Film),
];

fn entry_icon(kind: FileKind) -> (IconName, &'static str) {
    match kind {
        FileKind::Folder => (IconName::Folder, "#f59e0b"),
        FileKind::Image => (IconName::Image, "#60a5fa"),
        FileKind::Video => (IconName::Film, "#f472b6"),
        FileKind::Document => (IconName::FileText, "#9ca3af"),
    }
}

#[component]
/// File Manager window contents.
pub fn FileManagerApp(
    /// Mount context from the desktop runtime.
    context: AppMountContext,
) -> impl IntoView {
    let launcher = context.services.launcher;
    let navigator = create_rw_signal(FileNavigator::new(build_file_tree(
        &context.services.media,
    )));
    let query = create_rw_signal(String::new());

    let navigate = move |step: &dyn Fn(&mut FileNavigator) -> bool| {
        let mut moved = false;
        navigator.update(|nav| moved = step(nav));
        if moved {
            query.set(String::new());
        }
    };
    let open = move |node: &FileNode| match open_action(node) {
        OpenAction::Navigate(id) => navigate(&|nav| nav.enter(&id)),
        OpenAction::Launch { app_id, data } => launcher.launch(app_id, Some(data)),
        OpenAction::Nothing => {}
    };

    let entries = create_memo(move |_| {
        let query = query.get();
        navigator.with(|nav| nav.visible_entries(&query))
    });
    let folder_name = Signal::derive(move || navigator.with(|nav| nav.current().name.clone()));
    let current_id = Signal::derive(move || navigator.with(|nav| nav.current().id.clone()));

    view! {
        <div class="app-shell app-files">
            <ToolBar layout_class="files-toolbar" aria_label="File navigation">
                <IconButton
                    icon=IconName::ArrowUp
                    aria_label="Up one level"
                    disabled=Signal::derive(move || navigator.with(|nav| !nav.can_go_up()))
                    on_click=Callback::new(move |_| navigate(&|nav| nav.up()))
                />
                <div class="files-breadcrumb">
                    <Icon icon=IconName::Folder size=IconSize::Xs />
                    <span>{move || navigator.with(FileNavigator::breadcrumb)}</span>
                </div>
                {move || {
                    view! {
                        <TextField
                            layout_class="files-search"
                            leading_icon=IconName::Search
                            placeholder=format!("Search {}", folder_name.get())
                            aria_label="Search this folder"
                            value=Signal::derive(move || query.get())
                            on_input=Callback::new(move |value| query.set(value))
                        />
                    }
                }}
            </ToolBar>

            <div class="files-workspace">
                <nav class="files-sidebar" aria-label="Quick access">
                    {QUICK_LINKS
                        .into_iter()
                        .map(|(id, label, icon)| {
                            view! {
                                <Button
                                    variant=ButtonVariant::Quiet
                                    leading_icon=icon
                                    selected=Signal::derive(move || current_id.get() == id)
                                    on_click=Callback::new(move |_| navigate(&|nav| nav.jump(id)))
                                >
                                    {label}
                                </Button>
                            }
                        })
                        .collect_view()}
                </nav>

                <section class="files-grid" role="list">
                    {move || {
                        let entries = entries.get();
                        if entries.is_empty() {
                            return view! { <EmptyState message="This folder is empty." /> }
                                .into_view();
                        }
                        entries
                            .into_iter()
                            .map(|node| {
                                let (icon, color) = entry_icon(node.kind);
                                let thumbnail = match (node.kind, node.url.clone()) {
                                    (FileKind::Image, Some(url)) => Some(
                                        view! { <img class="files-thumb" src=url alt=node.name.clone() /> }
                                            .into_view(),
                                    ),
                                    _ => None,
                                };
                                let name = node.name.clone();
                                let node = store_value(node);
                                view! {
                                    <div
                                        class="files-entry"
                                        role="listitem"
                                        title=name.clone()
                                        on:dblclick=move |_| node.with_value(|node| open(node))
                                    >
                                        {thumbnail.unwrap_or_else(|| {
                                            view! { <Icon icon size=IconSize::Px(48) color /> }.into_view()
                                        })}
                                        <span class="files-entry-name">{name}</span>
                                    </div>
                                }
                            })
                            .collect_view()
                    }}
                </section>
            </div>

            <StatusBar>
                <span>{move || format!("{} items", entries.with(Vec::len))}</span>
            </StatusBar>
        </div>
    }
}
