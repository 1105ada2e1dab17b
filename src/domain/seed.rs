use chrono::{DateTime, Utc};

use crate::domain::models::{
    announcement::{Announcement, Audience},
    question::{Question, QuestionStatus},
    session::{
        AttendanceRecord, AttendanceStatus, ResourceLink, Session, SessionAgendaItem,
    },
    user::{UserProfile, UserRole},
};
use crate::domain::store::MentorshipState;

fn ts(value: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(value)
        .expect("invalid seed timestamp")
        .with_timezone(&Utc)
}

fn agenda_item(time: &str, topic: &str, goal: Option<&str>) -> SessionAgendaItem {
    SessionAgendaItem {
        time: time.to_string(),
        topic: topic.to_string(),
        goal: goal.map(str::to_string),
    }
}

fn mentor() -> UserProfile {
    UserProfile {
        id: "mentor-1".to_string(),
        name: "김멘토".to_string(),
        role: UserRole::Mentor,
        email: "mentor@example.com".to_string(),
        avatar_url: None,
        bio: Some("프론트엔드 개발 8년차, React와 클린 아키텍처 전문".to_string()),
        organization: Some("MTM".to_string()),
    }
}

fn mentees() -> Vec<UserProfile> {
    let mentee = |id: &str, name: &str, email: &str, organization: &str| UserProfile {
        id: id.to_string(),
        name: name.to_string(),
        role: UserRole::Mentee,
        email: email.to_string(),
        avatar_url: None,
        bio: None,
        organization: Some(organization.to_string()),
    };

    vec![
        mentee("mentee-1", "달이", "moon@example.com", "멍멍대학교"),
        mentee("mentee-2", "깜이", "darkdog@example.com", "멍멍대학교"),
        mentee("mentee-3", "참깨", "bird@example.com", "짹짹대학교"),
    ]
}

fn attendance(
    session_id: &str,
    mentee_id: &str,
    status: AttendanceStatus,
    updated_at: &str,
) -> AttendanceRecord {
    AttendanceRecord {
        status,
        updated_at: ts(updated_at),
        ..AttendanceRecord::expected(session_id, mentee_id, Utc::now())
    }
}

fn sessions(mentor_id: &str, roster: &[UserProfile]) -> Vec<Session> {
    let attendee_ids: Vec<String> = roster.iter().map(|m| m.id.clone()).collect();

    let first = Session {
        id: "session-2024-08-1".to_string(),
        title: "React 상태 관리 집중 세션".to_string(),
        mentor_id: mentor_id.to_string(),
        start_at: ts("2024-08-20T19:00:00+09:00"),
        end_at: ts("2024-08-20T21:00:00+09:00"),
        location: "온라인 (Zoom)".to_string(),
        description: "실무에서 자주 문제되는 상태 관리 패턴을 리뷰하고, 멘티들의 코드 고민을 해결합니다."
            .to_string(),
        focus_tags: vec!["React".to_string(), "상태관리".to_string(), "실습".to_string()],
        attendee_ids: attendee_ids.clone(),
        agenda: vec![
            agenda_item("19:00", "체크인 & 난이도 진단", None),
            agenda_item("19:20", "상태 관리 패턴 비교", Some("장단점 이해")),
            agenda_item("20:00", "멘티 코드 리뷰", Some("실전 적용")),
            agenda_item("20:40", "Q&A 및 과제 안내", None),
        ],
        resources: vec![
            ResourceLink {
                label: "사전 읽기 자료".to_string(),
                url: "https://beta.reactjs.org/learn".to_string(),
            },
            ResourceLink {
                label: "과제 제출 폼".to_string(),
                url: "https://forms.gle/sample".to_string(),
            },
        ],
        questions: vec![
            Question {
                id: "question-1".to_string(),
                session_id: "session-2024-08-1".to_string(),
                author_id: "mentee-1".to_string(),
                content: "Redux Toolkit과 Zustand 중 어떤 것을 선택해야 할까요?".to_string(),
                created_at: ts("2024-08-14T10:30:00+09:00"),
                status: QuestionStatus::Pending,
                votes: 5,
                answer: None,
            },
            Question {
                id: "question-2".to_string(),
                session_id: "session-2024-08-1".to_string(),
                author_id: "mentee-2".to_string(),
                content:
                    "Context API로 글로벌 상태를 관리하고 있는데 렌더링 최적화가 어렵습니다. 구조를 어떻게 바꿔야 할까요?"
                        .to_string(),
                created_at: ts("2024-08-15T15:10:00+09:00"),
                status: QuestionStatus::InProgress,
                votes: 3,
                answer: None,
            },
        ],
        attendance: vec![
            attendance(
                "session-2024-08-1",
                "mentee-1",
                AttendanceStatus::CheckedIn,
                "2024-08-20T18:55:00+09:00",
            ),
            attendance(
                "session-2024-08-1",
                "mentee-2",
                AttendanceStatus::Expected,
                "2024-08-13T09:00:00+09:00",
            ),
            attendance(
                "session-2024-08-1",
                "mentee-3",
                AttendanceStatus::Expected,
                "2024-08-13T09:00:00+09:00",
            ),
        ],
    };

    let second = Session {
        id: "session-2024-08-2".to_string(),
        title: "TypeScript로 안전한 협업하기".to_string(),
        mentor_id: mentor_id.to_string(),
        start_at: ts("2024-08-27T19:00:00+09:00"),
        end_at: ts("2024-08-27T21:00:00+09:00"),
        location: "오프라인 (강남 위워크 5F)".to_string(),
        description: "팀 프로젝트에서 바로 적용할 수 있는 TypeScript 패턴을 다룹니다.".to_string(),
        focus_tags: vec![
            "TypeScript".to_string(),
            "협업".to_string(),
            "코드리뷰".to_string(),
        ],
        attendee_ids: attendee_ids.clone(),
        agenda: vec![
            agenda_item("19:00", "기존 코드 품질 리뷰", None),
            agenda_item("19:40", "타입 설계 워크숍", None),
            agenda_item("20:30", "출석 & 피드백 수집", None),
        ],
        resources: vec![ResourceLink {
            label: "예제 레포지토리".to_string(),
            url: "https://github.com/vercel/next.js".to_string(),
        }],
        questions: vec![Question {
            id: "question-3".to_string(),
            session_id: "session-2024-08-2".to_string(),
            author_id: "mentee-3".to_string(),
            content: "타입 가드와 제네릭을 함께 사용할 때 가장 깔끔한 패턴이 궁금합니다."
                .to_string(),
            created_at: ts("2024-08-16T09:00:00+09:00"),
            status: QuestionStatus::Pending,
            votes: 2,
            answer: None,
        }],
        attendance: attendee_ids
            .iter()
            .map(|mentee_id| {
                attendance(
                    "session-2024-08-2",
                    mentee_id,
                    AttendanceStatus::Expected,
                    "2024-08-18T11:30:00+09:00",
                )
            })
            .collect(),
    };

    vec![first, second]
}

fn announcements(mentor_id: &str) -> Vec<Announcement> {
    vec![
        Announcement {
            id: "announcement-1".to_string(),
            title: "8월 2주차 미션 안내".to_string(),
            content: "다음 세션 전까지 개인 프로젝트의 상태 관리 구조를 리팩터링해서 PR로 공유해주세요."
                .to_string(),
            created_at: ts("2024-08-13T09:00:00+09:00"),
            author_id: mentor_id.to_string(),
            audience: Audience::Mentees,
            action_url: Some("https://forms.gle/sample".to_string()),
        },
        Announcement {
            id: "announcement-2".to_string(),
            title: "오프라인 세션 출석 체크".to_string(),
            content: "8월 27일 세션은 오프라인으로 진행됩니다. 참석이 어려우면 미리 알려주세요."
                .to_string(),
            created_at: ts("2024-08-18T11:30:00+09:00"),
            author_id: mentor_id.to_string(),
            audience: Audience::All,
            action_url: None,
        },
    ]
}

/// The fixed initial snapshot the store is seeded with. Pure construction,
/// no logic beyond wiring the roster into each session.
pub fn initial_state() -> MentorshipState {
    let mentor = mentor();
    let mentees = mentees();
    let sessions = sessions(&mentor.id, &mentees);
    let announcements = announcements(&mentor.id);

    MentorshipState {
        mentor,
        mentees,
        sessions,
        announcements,
    }
}
