//! Two-phase project status nodes.
//!
//! [`mount`] builds a project node in the loading state and appends it to a
//! [`Container`]. [`render`] additionally spawns a task that awaits the
//! prober and resolves that node in place. A node is resolved at most once.

use crate::{
    error::PageError,
    models::Status,
    page::{Element, Node},
};
use std::{
    future::Future,
    sync::{Arc, Mutex, MutexGuard, PoisonError},
};
use tokio::task::JoinHandle;
use tracing::warn;

pub const CONTAINER_ID: &str = "project-statuses-container";
pub const LOADING_ICON: &str = "fluent:arrow-sync-circle-24-filled";
pub const LOADING_LABEL: &str = "Loading";

struct NodeInner {
    element: Element,
    resolved: Option<Status>,
}

/// Shared handle to one project's element.
#[derive(Clone)]
pub struct StatusNode {
    inner: Arc<Mutex<NodeInner>>,
}

impl StatusNode {
    fn new(element: Element) -> Self {
        Self {
            inner: Arc::new(Mutex::new(NodeInner {
                element,
                resolved: None,
            })),
        }
    }

    fn lock(&self) -> MutexGuard<'_, NodeInner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// `None` while loading.
    pub fn status(&self) -> Option<Status> {
        self.lock().resolved
    }

    pub fn is_loading(&self) -> bool {
        self.status().is_none()
    }

    pub fn snapshot(&self) -> Element {
        self.lock().element.clone()
    }

    pub fn to_html(&self) -> String {
        self.lock().element.to_html()
    }

    pub fn set_attribute(&self, name: &str, value: &str) {
        self.lock().element.set_attribute(name, value);
    }

    /// Swaps this node's `.status` contents for the status pair and tags the
    /// node with the status class.
    pub fn resolve(&self, status: Status) -> Result<(), PageError> {
        let mut inner = self.lock();
        if let Some(existing) = inner.resolved {
            return Err(PageError::AlreadyResolved(existing));
        }

        let display = status.display();
        inner
            .element
            .find_by_class_mut("status")
            .ok_or(PageError::MissingStatusElement)?
            .replace_children(status_children(display.icon, display.label));
        inner.element.add_class(status.as_str());
        inner.resolved = Some(status);
        Ok(())
    }
}

/// Append-only list of project nodes hosted by the page container.
#[derive(Clone, Default)]
pub struct Container {
    nodes: Arc<Mutex<Vec<StatusNode>>>,
}

impl Container {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<StatusNode>> {
        self.nodes.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn append(&self, node: StatusNode) {
        self.lock().push(node);
    }

    pub fn nodes(&self) -> Vec<StatusNode> {
        self.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    pub fn inner_html(&self) -> String {
        let mut out = String::new();
        for node in self.nodes() {
            node.lock().element.write_html(&mut out);
        }
        out
    }
}

pub struct RenderHandle {
    node: StatusNode,
    task: JoinHandle<Result<Status, PageError>>,
}

impl RenderHandle {
    pub fn node(&self) -> &StatusNode {
        &self.node
    }

    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }

    pub fn abort(&self) {
        self.task.abort();
    }

    /// Waits for the probe to finish and the node to be updated. Fails when
    /// the task was aborted or the node could not take the status.
    pub async fn settled(self) -> Result<Status, PageError> {
        self.task.await?
    }
}

pub fn build_loading_element(name: &str, link: Option<&str>) -> Element {
    let mut element = Element::new("a").with_class("project");
    if let Some(link) = link {
        element = element
            .with_attribute("href", link)
            .with_attribute("target", "_blank")
            .with_attribute("rel", "noopener noreferrer");
    }

    let mut status = Element::new("p").with_class("status");
    status.replace_children(status_children(LOADING_ICON, LOADING_LABEL));

    element
        .with_child(
            Element::new("p")
                .with_class("subheading")
                .with_class("name")
                .with_text(name),
        )
        .with_child(status)
}

fn status_children(icon: &str, label: &str) -> Vec<Node> {
    vec![
        Element::new("iconify-icon")
            .with_class("icon")
            .with_attribute("icon", icon)
            .with_attribute("width", "22")
            .with_attribute("height", "22")
            .into(),
        Element::new("span")
            .with_class("subheading")
            .with_text(label)
            .into(),
    ]
}

/// Appends a loading node for the project without starting a probe.
pub fn mount(container: &Container, name: &str, link: Option<&str>) -> StatusNode {
    let node = StatusNode::new(build_loading_element(name, link));
    container.append(node.clone());
    node
}

/// Mounts a loading node, then resolves it from `prober` on a spawned task.
///
/// Must be called from within a tokio runtime.
pub fn render<P>(container: &Container, name: &str, link: Option<&str>, prober: P) -> RenderHandle
where
    P: Future<Output = Status> + Send + 'static,
{
    let node = mount(container, name, link);
    let target = node.clone();
    let project = name.to_string();
    let task = tokio::spawn(async move {
        let status = prober.await;
        target.resolve(status).map_err(|err| {
            warn!(project = %project, error = %err, "failed to update status node");
            err
        })?;
        Ok::<_, PageError>(status)
    });
    RenderHandle { node, task }
}
