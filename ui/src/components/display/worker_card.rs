use dioxus::prelude::*;

use crate::services::client::Worker;

#[derive(Props, PartialEq, Clone)]
pub struct WorkerCardProps {
    pub worker: Worker,
    pub on_select: EventHandler<String>,
}

/// Card shown in the discovery grid; selecting it opens the worker's
/// profile page.
#[component]
pub fn WorkerCard(props: WorkerCardProps) -> Element {
    let worker = props.worker.clone();
    let worker_id = worker.id.clone();

    rsx! {
        div {
            class: "worker-card",
            onclick: move |_| props.on_select.call(worker_id.clone()),

            if let Some(image) = &worker.image {
                img {
                    class: "worker-card-image",
                    src: "{image}",
                    alt: "{worker.name}"
                }
            }

            div {
                class: "worker-card-body",
                h3 {
                    class: "worker-card-name",
                    "{worker.name}"
                }
                p {
                    class: "worker-card-service",
                    "{worker.service}"
                }
                if let Some(description) = &worker.description {
                    p {
                        class: "worker-card-description",
                        "{description}"
                    }
                }
            }
        }
    }
}
