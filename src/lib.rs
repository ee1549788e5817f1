pub mod shared {
    pub mod core {
        pub mod errors;
        pub mod primitives;
    }
    pub mod infrastructure {
        pub mod config;
        pub mod http;
        pub mod repository;
    }
}

pub mod modules {
    pub mod courses {
        pub mod core {
            pub mod calendar;
            pub mod course;
            pub mod meeting;
            pub mod schedule;
            pub mod weekdays;
        }
        pub mod use_cases {
            pub mod create_course {
                pub mod command;
                pub mod decide;
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod update_course {
                pub mod command;
                pub mod decide;
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod delete_course {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod list_courses {
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod enroll_student {
                pub mod command;
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod view_calendar {
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod course_roster {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod record_meeting {
                pub mod command;
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod take_attendance {
                pub mod command;
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod list_meetings {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod cancel_meeting {
                pub mod inbound {
                    pub mod http;
                }
            }
        }
        pub mod adapters {
            pub mod outbound {
                pub mod course_repository;
                pub mod course_repository_in_memory;
                pub mod enrollment_repository;
                pub mod enrollment_repository_in_memory;
                pub mod meeting_repository;
                pub mod meeting_repository_in_memory;
            }
        }
    }
    pub mod students {
        pub mod core {
            pub mod student;
        }
        pub mod use_cases {
            pub mod register_student {
                pub mod command;
                pub mod decide;
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod update_student {
                pub mod command;
                pub mod decide;
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod delete_student {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod view_student {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
        }
        pub mod adapters {
            pub mod outbound {
                pub mod student_repository;
                pub mod student_repository_in_memory;
            }
        }
    }
    pub mod coaches {
        pub mod core {
            pub mod coach;
        }
        pub mod use_cases {
            pub mod register_coach {
                pub mod command;
                pub mod decide;
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod update_coach {
                pub mod command;
                pub mod decide;
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod view_coaches {
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod remove_coach {
                pub mod inbound {
                    pub mod http;
                }
            }
        }
        pub mod adapters {
            pub mod outbound {
                pub mod coach_repository;
                pub mod coach_repository_in_memory;
            }
        }
    }
    pub mod payments {
        pub mod core {
            pub mod income;
            pub mod payment;
        }
        pub mod use_cases {
            pub mod record_payment {
                pub mod command;
                pub mod decide;
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod analyse_income {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
        }
        pub mod adapters {
            pub mod outbound {
                pub mod payment_repository;
                pub mod payment_repository_in_memory;
            }
        }
    }
}

pub mod shell;
