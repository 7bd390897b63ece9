//! Simulated backend payloads for the clinic screens.
//!
//! All data in this module is hardcoded and fictional. No backend is
//! contacted. Payloads deliberately mix the date shapes the real backend
//! emits (plain dates, ISO date-times, space-separated timestamps) and
//! include a few malformed entries so intake and normalization are exercised.

use serde_json::{json, Value};

/// The calendar date the fixtures are written around.
pub const FIXTURE_TODAY: &str = "2026-02-18";

/// Appointment list as served to the doctor and patient screens.
pub fn appointments() -> Value {
    json!([
        {
            "id": 101, "patientName": "Nguyễn Văn An", "patientPhone": "0903123456",
            "patientCode": "BN-0001", "doctorName": "BS. Trần Minh Khoa",
            "departmentName": "Khoa Nội tổng quát", "appointmentDate": "2026-02-18",
            "appointmentTime": "08:00", "queueNumber": 1, "status": "COMPLETED",
            "reason": "Tái khám huyết áp"
        },
        {
            "id": 102, "patientName": "Trần Thị Bình", "patientPhone": "0912555777",
            "patientCode": "BN-0002", "doctorName": "BS. Trần Minh Khoa",
            "departmentName": "Khoa Nội tổng quát", "appointmentDate": "2026-02-18T08:30:00",
            "appointmentTime": "08:30", "queueNumber": 2, "status": "IN_PROGRESS",
            "reason": "Mệt mỏi kéo dài"
        },
        {
            "id": 103, "patientName": "Lê Hoàng Cường", "patientPhone": "0988000111",
            "patientCode": "BN-0003", "doctorName": "BS. Trần Minh Khoa",
            "departmentName": "Khoa Nội tổng quát", "appointmentDate": "2026-02-18 09:00:00",
            "appointmentTime": "09:00", "queueNumber": 3, "status": "CONFIRMED",
            "reason": "Đau đầu"
        },
        {
            "id": 104, "patientName": "Phạm Thu Hà", "patientPhone": "0977222333",
            "patientCode": "BN-0004", "doctorName": "BS. Trần Minh Khoa",
            "departmentName": "Khoa Nội tổng quát", "appointmentDate": "2026-02-18",
            "appointmentTime": "09:30", "status": "APPROVED",
            "reason": "Khám sức khỏe định kỳ"
        },
        {
            "id": 105, "patientName": "Đặng Quốc Bảo", "patientPhone": "0909444555",
            "patientCode": "BN-0005", "doctorName": "BS. Nguyễn Thị Lan",
            "departmentName": "Khoa Tim mạch", "appointmentDate": "2026-02-19",
            "appointmentTime": "10:00", "queueNumber": 1, "status": "PENDING",
            "reason": "Hồi hộp, đánh trống ngực"
        },
        {
            "id": 106, "patientName": "Võ Thị Mai", "patientPhone": "0933666888",
            "patientCode": "BN-0006", "doctorName": "BS. Nguyễn Thị Lan",
            "departmentName": "Khoa Tim mạch", "appointmentDate": "2026-02-17T14:00:00",
            "appointmentTime": "14:00", "queueNumber": 4, "status": "CANCELLED",
            "reason": "Đau ngực"
        },
        {
            "id": 107, "patientName": "Bùi Đức Long", "patientPhone": "0944111222",
            "patientCode": "BN-0007", "doctorName": "BS. Trần Minh Khoa",
            "departmentName": "Khoa Nội tổng quát", "appointmentDate": "không rõ",
            "status": "NEEDS_MANUAL_REVIEW", "reason": "Thanh toán chưa xác nhận"
        },
        {
            "id": 108, "patientName": "Hoàng Gia Huy", "patientPhone": "0966999000",
            "patientCode": "BN-0008", "doctorName": "BS. Trần Minh Khoa",
            "departmentName": "Khoa Nội tổng quát", "appointmentDate": "2026-02-18",
            "appointmentTime": "10:30", "queueNumber": 5, "status": "CONFIRMED",
            "reason": "Ho kéo dài"
        },
        { "patientName": "Bản ghi thiếu id", "appointmentDate": "2026-02-18" }
    ])
}

/// Medical records, wrapped in the paged envelope the records endpoint uses.
pub fn medical_records() -> Value {
    json!({
        "content": [
            {
                "id": 501, "recordCode": "HS-2026-0501", "patientName": "Nguyễn Văn An",
                "patientCode": "BN-0001", "doctorName": "BS. Trần Minh Khoa",
                "departmentName": "Khoa Nội tổng quát", "diagnosis": "Tăng huyết áp độ 1",
                "visitDate": "2026-02-18T08:20:00", "status": "COMPLETED"
            },
            {
                "id": 502, "recordCode": "HS-2026-0502", "patientName": "Trần Thị Bình",
                "patientCode": "BN-0002", "doctorName": "BS. Trần Minh Khoa",
                "departmentName": "Khoa Nội tổng quát", "diagnosis": "Thiếu máu thiếu sắt",
                "visitDate": "2026-02-18", "status": "IN_PROGRESS"
            },
            {
                "id": 497, "recordCode": "HS-2026-0497", "patientName": "Võ Thị Mai",
                "patientCode": "BN-0006", "doctorName": "BS. Nguyễn Thị Lan",
                "departmentName": "Khoa Tim mạch", "diagnosis": "Rối loạn nhịp tim",
                "visitDate": "2026-02-10", "status": "COMPLETED"
            },
            {
                "id": 480, "recordCode": "HS-2026-0480", "patientName": "Nguyễn Văn An",
                "patientCode": "BN-0001", "doctorName": "BS. Trần Minh Khoa",
                "departmentName": "Khoa Nội tổng quát", "diagnosis": "Viêm họng cấp",
                "visitDate": "2026-01-22 15:45:00", "status": "COMPLETED"
            }
        ],
        "totalElements": 4
    })
}

pub fn invoices() -> Value {
    json!({
        "data": [
            {
                "id": 9001, "invoiceCode": "HD-260218-001", "patientName": "Nguyễn Văn An",
                "patientPhone": "0903123456", "issuedAt": "2026-02-18T09:05:00",
                "totalAmount": 350000.0, "status": "PAID"
            },
            {
                "id": 9002, "invoiceCode": "HD-260218-002", "patientName": "Trần Thị Bình",
                "patientPhone": "0912555777", "issuedAt": "2026-02-18T10:10:00",
                "totalAmount": 820000.0, "status": "UNPAID"
            },
            {
                "id": 8990, "invoiceCode": "HD-260210-014", "patientName": "Võ Thị Mai",
                "patientPhone": "0933666888", "issuedAt": "2026-02-10",
                "totalAmount": 1250000.0, "status": "PAID"
            },
            {
                "id": 8991, "invoiceCode": "HD-260210-015", "patientName": "Lê Hoàng Cường",
                "issuedAt": "2026-02-10", "totalAmount": "không hợp lệ", "status": "UNPAID"
            }
        ]
    })
}

pub fn wallet_transactions() -> Value {
    json!([
        {
            "id": "TX-7781", "transactionCode": "VNP14839201", "ownerName": "Nguyễn Văn An",
            "description": "Nạp tiền ví qua VNPay", "createdAt": "2026-02-18T07:55:12",
            "amount": 500000.0, "status": "SUCCESS"
        },
        {
            "id": "TX-7782", "transactionCode": "VNP14839255", "ownerName": "Trần Thị Bình",
            "description": "Thanh toán hóa đơn HD-260218-002", "createdAt": "2026-02-18T10:12:40",
            "amount": 820000.0, "status": "PENDING"
        },
        {
            "id": "TX-7760", "transactionCode": "VNP14830017", "ownerName": "Bùi Đức Long",
            "description": "Nạp tiền ví qua VNPay", "createdAt": "2026-02-16 21:03:09",
            "amount": 300000.0, "status": "NEEDS_MANUAL_REVIEW"
        },
        {
            "id": "TX-7702", "transactionCode": "VNP14810446", "ownerName": "Võ Thị Mai",
            "description": "Thanh toán hóa đơn HD-260210-014", "createdAt": "2026-02-10T16:30:00",
            "amount": 1250000.0, "status": "FAILED"
        }
    ])
}

pub fn prescriptions() -> Value {
    json!([
        {
            "id": 3001, "patientName": "Nguyễn Văn An", "doctorName": "BS. Trần Minh Khoa",
            "prescribedAt": "2026-02-18T08:40:00", "status": "COMPLETED",
            "medications": [
                { "name": "Amlodipin 5mg", "dosage": "1 viên/ngày", "quantity": 30,
                  "instructions": "Uống buổi sáng sau ăn" },
                { "name": "Aspirin 81mg", "dosage": "1 viên/ngày", "quantity": 30 }
            ]
        },
        {
            "id": 2950, "patientName": "Nguyễn Văn An", "doctorName": "BS. Trần Minh Khoa",
            "prescribedAt": "2026-01-22 16:00:00", "status": "COMPLETED",
            "medications": [
                { "name": "Amoxicillin 500mg", "dosage": "2 viên/ngày", "quantity": 14 },
                { "name": "Paracetamol 500mg", "dosage": "Khi sốt trên 38.5°C", "quantity": 10 }
            ]
        },
        {
            "id": 2951, "patientName": "Nguyễn Văn An", "doctorName": "BS. Lý Thanh Tâm",
            "prescribedAt": "2026-01-22T17:30:00", "status": "COMPLETED",
            "medications": [
                { "name": "Vitamin C 500mg", "dosage": "1 viên/ngày", "quantity": 20 }
            ]
        },
        {
            "id": 2800, "patientName": "Nguyễn Văn An", "doctorName": "BS. Trần Minh Khoa",
            "status": "COMPLETED",
            "medications": [ { "name": "Omeprazol 20mg", "quantity": 14 } ]
        }
    ])
}
