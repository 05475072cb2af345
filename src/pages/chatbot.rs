use leptos::*;
use leptos_router::*;

use crate::api::ApiError;
use crate::app::use_config;
use crate::auth::{use_auth, AuthContext, AuthStatus};
use crate::models::{ChatRequest, ChatRole, Conversation, Transcript};
use crate::routes::AppRoute;

/// Chat with the assistant
#[component]
pub fn Chatbot() -> impl IntoView {
    let auth = use_auth();
    let bypass_login = use_config().dev.bypass_login;

    let transcript = create_rw_signal(Transcript::default());
    let (draft, set_draft) = create_signal(String::new());
    let (smart_mode, set_smart_mode) = create_signal(false);

    // Bumped whenever the conversation list may have changed
    let (history_version, set_history_version) = create_signal(0u32);
    let refresh_history = move || set_history_version.update(|n| *n += 1);

    // The request remembers the transcript generation it was sent from
    let send = create_action(move |input: &(u64, ChatRequest)| {
        let (generation, request) = input.clone();
        async move {
            let reply = auth.api().send_chat(&request).await;
            (generation, reply.map_err(|e| e.user_message()))
        }
    });

    create_effect(move |_| {
        if let Some((generation, reply)) = send.value().get() {
            let answered = reply.is_ok();
            let applied = transcript
                .try_update(|t| t.reply(generation, reply))
                .unwrap_or(false);
            if applied && answered {
                refresh_history();
            }
        }
    });

    let waiting = move || {
        send.pending().get()
            && send.input().with(|input| {
                input.as_ref().map(|(generation, _)| *generation)
                    == Some(transcript.with(Transcript::generation))
            })
    };

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();

        let message = draft.get_untracked().trim().to_string();
        if message.is_empty() || send.pending().get_untracked() {
            return;
        }
        let Some(user) = auth.user_signal().get_untracked() else {
            return;
        };

        let (generation, conversation_id) =
            transcript.with_untracked(|t| (t.generation(), t.conversation_id()));
        transcript.update(|t| t.push(ChatRole::User, message.clone()));
        set_draft.set(String::new());
        send.dispatch((
            generation,
            ChatRequest {
                user_id: user.id,
                message,
                smart_mode: smart_mode.get_untracked(),
                conversation_id,
            },
        ));
    };

    let new_conversation = move |_| transcript.update(Transcript::reset);

    view! {
        <div class="chat-page">
            <Show when=move || auth.is_authenticated()>
                <ConversationHistory
                    auth=auth
                    transcript=transcript
                    version=history_version
                    on_change=refresh_history
                />
            </Show>

            <div class="chat-main">
                <div class="chat-header">
                    <h2>"Chat"</h2>
                    <label class="checkbox smart-mode">
                        <input
                            type="checkbox"
                            prop:checked=smart_mode
                            on:change=move |ev| set_smart_mode.set(event_target_checked(&ev))
                        />
                        <span>"Smart mode"</span>
                    </label>
                    <button class="button" on:click=new_conversation>
                        "New conversation"
                    </button>
                </div>

                <div class="chat-transcript">
                    <Show when=move || transcript.with(Transcript::is_empty)>
                        <div class="chat-empty">"Ask anything to get started."</div>
                    </Show>
                    <For
                        each=move || transcript.with(|t| t.messages().to_vec())
                        key=|message| message.id
                        children=move |message| {
                            view! {
                                <div class=format!("chat-message {}", message.role.as_str())>
                                    <div class="chat-bubble">{message.content}</div>
                                    <span class="chat-time">{message.sent_at}</span>
                                </div>
                            }
                        }
                    />
                    <Show when=waiting>
                        <div class="chat-message assistant pending">
                            <div class="chat-bubble">"Thinking..."</div>
                        </div>
                    </Show>
                </div>

                <Show
                    when=move || auth.is_authenticated()
                    fallback=move || {
                        if bypass_login {
                            view! {
                                <div class="info-box">
                                    "Login is bypassed in this build. Chat needs a signed-in account."
                                </div>
                            }
                            .into_view()
                        } else {
                            view! {
                                <div class="info-box">
                                    "Sign in to start chatting. "
                                    <A href=AppRoute::Login.path()>"Sign in"</A>
                                </div>
                            }
                            .into_view()
                        }
                    }
                >
                    <form class="chat-input" on:submit=on_submit>
                        <input
                            type="text"
                            placeholder="Type a message..."
                            prop:value=draft
                            on:input=move |ev| set_draft.set(event_target_value(&ev))
                        />
                        <button type="submit" class="button primary" disabled=move || send.pending().get()>
                            "Send"
                        </button>
                    </form>
                </Show>
            </div>
        </div>
    }
}

/// Past conversations of the signed-in user
#[component]
fn ConversationHistory<F>(
    auth: AuthContext,
    transcript: RwSignal<Transcript>,
    version: ReadSignal<u32>,
    on_change: F,
) -> impl IntoView
where
    F: Fn() + Copy + 'static,
{
    let user_id = create_memo(move |_| auth.user_signal().with(|u| u.as_ref().map(|u| u.id)));

    let conversations = create_local_resource(
        move || (version.get(), user_id.get()),
        move |(_, user_id)| async move {
            match user_id {
                Some(id) => auth
                    .api()
                    .list_conversations(id)
                    .await
                    .map(|list| list.conversations),
                None => Ok(Vec::new()),
            }
        },
    );

    let open = create_action(move |conversation_id: &i64| {
        let conversation_id = *conversation_id;
        async move {
            let messages = auth.api().conversation_messages(conversation_id).await;
            (conversation_id, messages)
        }
    });

    create_effect(move |_| {
        if let Some((conversation_id, result)) = open.value().get() {
            match result {
                Ok(messages) => transcript.update(|t| t.load(conversation_id, &messages)),
                Err(e) => transcript.update(|t| t.push(ChatRole::Error, e.user_message())),
            }
        }
    });

    let remove = create_action(move |conversation_id: &i64| {
        let conversation_id = *conversation_id;
        async move {
            auth.api()
                .delete_conversation(conversation_id)
                .await
                .map(|_| conversation_id)
        }
    });

    create_effect(move |_| {
        if let Some(result) = remove.value().get() {
            match result {
                Ok(deleted) => {
                    if transcript.with_untracked(|t| t.conversation_id()) == Some(deleted) {
                        transcript.update(Transcript::reset);
                    }
                    on_change();
                }
                Err(e) => log::warn!("Could not delete conversation: {}", e),
            }
        }
    });

    let active = move || transcript.with(|t| t.conversation_id());

    view! {
        <aside class="chat-history">
            <h3>"History"</h3>
            <Suspense fallback=move || view! { <div class="loading">"Loading..."</div> }>
                {move || {
                    conversations.get().map(|result: Result<Vec<Conversation>, ApiError>| {
                        match result {
                            Ok(list) if list.is_empty() => {
                                view! { <div class="no-data">"No conversations yet"</div> }.into_view()
                            }
                            Ok(list) => {
                                view! {
                                    <ul class="history-list">
                                        <For
                                            each=move || list.clone()
                                            key=|conversation| conversation.id
                                            children=move |conversation| {
                                                let id = conversation.id;
                                                view! {
                                                    <li class="history-item" class:active=move || active() == Some(id)>
                                                        <button class="history-open" on:click=move |_| open.dispatch(id)>
                                                            <span class="history-title">{conversation.title.clone()}</span>
                                                            <span class="history-time">{conversation.last_active()}</span>
                                                        </button>
                                                        <button
                                                            class="history-delete"
                                                            title="Delete conversation"
                                                            disabled=move || remove.pending().get()
                                                            on:click=move |_| remove.dispatch(id)
                                                        >
                                                            "×"
                                                        </button>
                                                    </li>
                                                }
                                            }
                                        />
                                    </ul>
                                }
                                .into_view()
                            }
                            Err(e) => {
                                view! { <div class="error-banner">{e.user_message()}</div> }.into_view()
                            }
                        }
                    })
                }}
            </Suspense>
        </aside>
    }
}
