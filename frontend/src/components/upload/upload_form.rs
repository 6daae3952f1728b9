use web_sys::{File, HtmlInputElement, HtmlTextAreaElement};
use yew::platform::spawn_local;
use yew::prelude::*;

use common::error::ApiResult;
use common::model::{MaterialUpload, PendingUpload, UploadState, LEVELS};

use crate::api::ApiClient;
use crate::components::home::LevelDropdown;

#[derive(Properties, PartialEq)]
pub struct UploadFormProps {
    pub token: String,
    /// The upload came back 401: the credential is no longer valid.
    pub on_unauthorized: Callback<()>,
}

pub enum Msg {
    LevelChanged(Option<u32>),
    CodeChanged(String),
    TitleChanged(String),
    DescriptionChanged(String),
    FileChanged(Option<File>),
    Submit,
    Finished(String, ApiResult<()>),
}

pub struct UploadForm {
    api: ApiClient,
    level: u32,
    course_code: String,
    course_title: String,
    description: String,
    file: Option<File>,
    uploading: bool,
    error: Option<String>,
    /// Session-local history of submitted uploads, newest first. Never
    /// reconciled with the server.
    pending: Vec<PendingUpload>,
    file_input: NodeRef,
}

impl UploadForm {
    fn metadata(&self) -> MaterialUpload {
        MaterialUpload {
            level: self.level,
            course_code: self.course_code.clone(),
            course_title: self.course_title.clone(),
            description: self.description.clone(),
            file_name: self.file.as_ref().map(|f| f.name()).unwrap_or_default(),
        }
    }

    fn set_pending_state(&mut self, id: &str, state: UploadState) {
        if let Some(entry) = self.pending.iter_mut().find(|p| p.id == id) {
            entry.state = state;
        }
    }

    /// Success path only: entered values are kept on failure so the user
    /// never re-types them.
    fn reset_fields(&mut self) {
        self.course_code.clear();
        self.course_title.clear();
        self.description.clear();
        self.file = None;
        if let Some(input) = self.file_input.cast::<HtmlInputElement>() {
            input.set_value("");
        }
    }
}

impl Component for UploadForm {
    type Message = Msg;
    type Properties = UploadFormProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            api: ApiClient::default(),
            level: LEVELS[1],
            course_code: String::new(),
            course_title: String::new(),
            description: String::new(),
            file: None,
            uploading: false,
            error: None,
            pending: Vec::new(),
            file_input: NodeRef::default(),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::LevelChanged(level) => {
                if let Some(level) = level {
                    self.level = level;
                }
                true
            }
            Msg::CodeChanged(value) => {
                self.course_code = value;
                true
            }
            Msg::TitleChanged(value) => {
                self.course_title = value;
                true
            }
            Msg::DescriptionChanged(value) => {
                self.description = value;
                true
            }
            Msg::FileChanged(file) => {
                self.file = file;
                true
            }
            Msg::Submit => {
                self.error = None;
                let upload = self.metadata();
                if let Err(err) = upload.validate() {
                    self.error = Some(err.to_string());
                    return true;
                }
                // validate() already rejected a missing file.
                let Some(file) = self.file.clone() else {
                    return true;
                };

                let id = uuid::Uuid::new_v4().to_string();
                self.pending.insert(
                    0,
                    PendingUpload {
                        id: id.clone(),
                        upload: upload.clone(),
                        state: UploadState::InFlight,
                    },
                );
                self.uploading = true;

                let api = self.api.clone();
                let token = ctx.props().token.clone();
                let link = ctx.link().clone();
                spawn_local(async move {
                    let result = api.upload_material(&token, &upload, &file).await;
                    link.send_message(Msg::Finished(id, result));
                });
                true
            }
            Msg::Finished(id, result) => {
                self.uploading = false;
                match result {
                    Ok(()) => {
                        self.set_pending_state(&id, UploadState::Done);
                        self.reset_fields();
                    }
                    Err(err) => {
                        gloo_console::error!("upload failed:", err.to_string());
                        self.set_pending_state(&id, UploadState::Failed(err.to_string()));
                        self.error = Some(err.to_string());
                        if err.is_unauthorized() {
                            ctx.props().on_unauthorized.emit(());
                        }
                    }
                }
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();

        html! {
            <div class="container mx-auto p-4">
                <h2 class="text-xl font-semibold mb-4">{"Upload Material"}</h2>
                <form onsubmit={link.callback(|e: SubmitEvent| {
                    e.prevent_default();
                    Msg::Submit
                })}>
                    <div class="mb-4">
                        <label for="level" class="block text-gray-700 text-sm font-bold mb-2">{"Level:"}</label>
                        <LevelDropdown
                            value={Some(self.level)}
                            on_change={link.callback(Msg::LevelChanged)}
                        />
                    </div>
                    <div class="mb-4">
                        <label for="courseCode" class="block text-gray-700 text-sm font-bold mb-2">{"Course Code:"}</label>
                        <input
                            type="text"
                            id="courseCode"
                            class="shadow border rounded w-full py-2 px-3 text-gray-700 leading-tight"
                            value={self.course_code.clone()}
                            oninput={link.callback(|e: InputEvent| {
                                let input: HtmlInputElement = e.target_unchecked_into();
                                Msg::CodeChanged(input.value())
                            })}
                        />
                    </div>
                    <div class="mb-4">
                        <label for="courseTitle" class="block text-gray-700 text-sm font-bold mb-2">{"Course Title:"}</label>
                        <input
                            type="text"
                            id="courseTitle"
                            class="shadow border rounded w-full py-2 px-3 text-gray-700 leading-tight"
                            value={self.course_title.clone()}
                            oninput={link.callback(|e: InputEvent| {
                                let input: HtmlInputElement = e.target_unchecked_into();
                                Msg::TitleChanged(input.value())
                            })}
                        />
                    </div>
                    <div class="mb-4">
                        <label for="description" class="block text-gray-700 text-sm font-bold mb-2">{"Description:"}</label>
                        <textarea
                            id="description"
                            class="shadow border rounded w-full py-2 px-3 text-gray-700 leading-tight"
                            value={self.description.clone()}
                            oninput={link.callback(|e: InputEvent| {
                                let input: HtmlTextAreaElement = e.target_unchecked_into();
                                Msg::DescriptionChanged(input.value())
                            })}
                        />
                    </div>
                    <div class="mb-4">
                        <label for="material" class="block text-gray-700 text-sm font-bold mb-2">{"Material:"}</label>
                        <input
                            type="file"
                            id="material"
                            ref={self.file_input.clone()}
                            class="shadow border rounded w-full py-2 px-3 text-gray-700 leading-tight"
                            onchange={link.callback(|e: Event| {
                                let input: HtmlInputElement = e.target_unchecked_into();
                                Msg::FileChanged(input.files().and_then(|files| files.get(0)))
                            })}
                        />
                    </div>
                    <button
                        type="submit"
                        class="bg-green-500 hover:bg-green-700 text-white font-bold py-2 px-4 rounded"
                        disabled={self.uploading}
                    >
                        { if self.uploading { "Uploading..." } else { "Upload" } }
                    </button>
                    if let Some(error) = self.error.clone() {
                        <p class="text-red-500 mt-2">{error}</p>
                    }
                </form>

                if !self.pending.is_empty() {
                    <div class="mt-6">
                        <h3 class="text-lg font-semibold mb-2">{"This session's uploads"}</h3>
                        <ul class="list-disc pl-5">
                            { for self.pending.iter().map(|entry| {
                                let status = match &entry.state {
                                    UploadState::InFlight => "uploading...".to_string(),
                                    UploadState::Done => "done".to_string(),
                                    UploadState::Failed(reason) => format!("failed: {reason}"),
                                };
                                html! {
                                    <li key={entry.id.clone()} class="mb-1">
                                        {format!(
                                            "{} — {} ({})",
                                            entry.upload.course_title, entry.upload.file_name, status
                                        )}
                                    </li>
                                }
                            }) }
                        </ul>
                    </div>
                }
            </div>
        }
    }
}
